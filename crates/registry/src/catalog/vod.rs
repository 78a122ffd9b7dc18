use m2a_types::{CommandSpec, Domain, HttpMethod, ParameterSpec};

const ASSETS: &str = "/api/v1/vod/assets";
const ASSET: &str = "/api/v1/vod/assets/{asset_id}";

fn command(name: &'static str, method: HttpMethod, path: &'static str) -> CommandSpec {
    CommandSpec::new(Domain::Vod, name, method, path)
}

fn asset_id(description: &'static str) -> ParameterSpec {
    ParameterSpec::string("asset_id").required().describe(description)
}

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        command("list_vod_assets", HttpMethod::Get, ASSETS)
            .summary("List all VOD assets")
            .action("list VOD assets")
            .param(ParameterSpec::number("limit").describe("Maximum number of results"))
            .param(ParameterSpec::number("offset").describe("Offset for pagination")),
        command("get_vod_asset", HttpMethod::Get, ASSET)
            .summary("Get details of a specific VOD asset")
            .action("get VOD asset")
            .param(asset_id("The ID of the VOD asset")),
        command("update_vod_metadata", HttpMethod::Put, ASSET)
            .summary("Update metadata for a VOD asset")
            .action("update VOD metadata")
            .requires_any_field("at least one metadata field is required")
            .param(asset_id("The ID of the VOD asset"))
            .param(ParameterSpec::string("title").describe("Asset title"))
            .param(ParameterSpec::string("description").describe("Asset description"))
            .param(ParameterSpec::string("tags").describe("Comma-separated tags")),
        command("delete_vod_asset", HttpMethod::Delete, ASSET)
            .summary("Delete a VOD asset")
            .action("delete VOD asset")
            .acknowledges_deletion("VOD asset")
            .param(asset_id("The ID of the asset to delete")),
        command("get_playback_url", HttpMethod::Get, "/api/v1/vod/assets/{asset_id}/playback")
            .summary("Get streaming playback URL for a VOD asset")
            .action("get playback URL")
            .param(asset_id("The ID of the VOD asset"))
            .param(
                ParameterSpec::string("format")
                    .describe("Playback format")
                    .one_of(&["hls", "dash", "mp4"])
                    .default_value("hls"),
            ),
    ]
}
