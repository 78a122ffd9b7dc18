use m2a_types::{CommandSpec, Domain, HttpMethod, ParameterSpec};

const CHANNELS: &str = "/api/v3/live/channels";
const CHANNEL: &str = "/api/v3/live/channels/{channel_id}";
const ENCODER_CONFIGS: &str = "/api/v1/live/encoder-configs";
const WORKFLOWS: &str = "/api/v1/live/workflows";

fn command(name: &'static str, method: HttpMethod, path: &'static str) -> CommandSpec {
    CommandSpec::new(Domain::Live, name, method, path)
}

fn channel_id(description: &'static str) -> ParameterSpec {
    ParameterSpec::string("channel_id").required().describe(description)
}

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        command("list_channels", HttpMethod::Get, CHANNELS)
            .summary("List all MediaLive channels")
            .action("list channels")
            .param(
                ParameterSpec::string("state")
                    .describe("Filter by channel state")
                    .one_of(&["IDLE", "CREATING", "STARTING", "RUNNING", "STOPPING", "DELETING"]),
            ),
        command("get_channel", HttpMethod::Get, CHANNEL)
            .summary("Get details of a specific MediaLive channel")
            .action("get channel")
            .param(channel_id("The ID of the channel")),
        command("create_channel", HttpMethod::Post, CHANNELS)
            .summary("Create a new MediaLive channel")
            .action("create channel")
            .param(ParameterSpec::string("name").required().describe("Channel name"))
            .param(
                ParameterSpec::string("input_type")
                    .required()
                    .describe("Input type")
                    .one_of(&["RTMP_PUSH", "RTP_PUSH", "UDP_PUSH", "MEDIACONNECT"]),
            )
            .param(ParameterSpec::string("encoder_config_id").describe("Encoder configuration ID to use")),
        command("start_channel", HttpMethod::Post, "/api/v3/live/channels/{channel_id}/start")
            .summary("Start a MediaLive channel")
            .action("start channel")
            .param(channel_id("The ID of the channel to start")),
        command("stop_channel", HttpMethod::Post, "/api/v3/live/channels/{channel_id}/stop")
            .summary("Stop a MediaLive channel")
            .action("stop channel")
            .param(channel_id("The ID of the channel to stop")),
        command("delete_channel", HttpMethod::Delete, CHANNEL)
            .summary("Delete a MediaLive channel")
            .action("delete channel")
            .acknowledges_deletion("Channel")
            .param(channel_id("The ID of the channel to delete")),
        command("list_encoder_configs", HttpMethod::Get, ENCODER_CONFIGS)
            .summary("List encoder configuration fragments")
            .action("list encoder configs"),
        command("get_encoder_config", HttpMethod::Get, "/api/v1/live/encoder-configs/{config_id}")
            .summary("Get details of a specific encoder configuration")
            .action("get encoder config")
            .param(
                ParameterSpec::string("config_id")
                    .required()
                    .describe("The ID of the encoder configuration"),
            ),
        command("list_workflows", HttpMethod::Get, WORKFLOWS)
            .summary("List all live streaming workflows")
            .action("list workflows"),
        command("get_workflow", HttpMethod::Get, "/api/v1/live/workflows/{workflow_id}")
            .summary("Get details of a specific workflow")
            .action("get workflow")
            .param(ParameterSpec::string("workflow_id").required().describe("The ID of the workflow")),
        command("create_workflow", HttpMethod::Post, WORKFLOWS)
            .summary("Create a new live streaming workflow")
            .action("create workflow")
            .param(ParameterSpec::string("name").required().describe("Workflow name"))
            .param(ParameterSpec::string("description").describe("Workflow description")),
    ]
}
