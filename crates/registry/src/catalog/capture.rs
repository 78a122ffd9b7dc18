use m2a_types::{CommandSpec, Domain, HttpMethod, ParameterSpec};

const CAPTURES: &str = "/api/v1/connect/capture";
const CAPTURE: &str = "/api/v1/connect/capture/{capture_id}";

fn command(name: &'static str, method: HttpMethod, path: &'static str) -> CommandSpec {
    CommandSpec::new(Domain::Capture, name, method, path)
}

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        command("list_captures", HttpMethod::Get, CAPTURES)
            .summary("List all capture jobs (live-to-VOD)")
            .action("list captures")
            .param(
                ParameterSpec::string("status")
                    .describe("Filter by status")
                    .one_of(&["PENDING", "IN_PROGRESS", "COMPLETED", "FAILED", "CANCELLED"]),
            ),
        command("get_capture", HttpMethod::Get, CAPTURE)
            .summary("Get details of a specific capture job")
            .action("get capture")
            .param(ParameterSpec::string("capture_id").required().describe("The ID of the capture job")),
        command("create_capture", HttpMethod::Post, CAPTURES)
            .summary("Create a new live-to-VOD capture job")
            .action("create capture")
            .param(ParameterSpec::string("name").required().describe("Capture job name"))
            .param(ParameterSpec::string("channel_id").required().describe("Source channel ID"))
            .param(
                ParameterSpec::string("start_time")
                    .required()
                    .describe("Capture start time (ISO 8601)"),
            )
            .param(ParameterSpec::string("end_time").required().describe("Capture end time (ISO 8601)")),
        command("cancel_capture", HttpMethod::Post, "/api/v1/connect/capture/{capture_id}/cancel")
            .summary("Cancel an in-progress capture job")
            .action("cancel capture")
            .param(
                ParameterSpec::string("capture_id")
                    .required()
                    .describe("The ID of the capture job to cancel"),
            ),
        command("list_capture_exports", HttpMethod::Get, "/api/v1/connect/capture/exports")
            .summary("List all completed VOD exports from captures")
            .action("list capture exports"),
        command("get_capture_export", HttpMethod::Get, "/api/v1/connect/capture/exports/{export_id}")
            .summary("Get details of a specific capture export")
            .action("get capture export")
            .param(ParameterSpec::string("export_id").required().describe("The ID of the export")),
        // The capture id travels in the body here; the endpoint has no placeholder.
        command("create_clip", HttpMethod::Post, "/api/v1/connect/capture/clips")
            .summary("Create a frame-accurate clip from a capture")
            .action("create clip")
            .param(ParameterSpec::string("capture_id").required().describe("Source capture ID"))
            .param(
                ParameterSpec::string("start_timecode")
                    .required()
                    .describe("Start timecode (HH:MM:SS:FF)"),
            )
            .param(
                ParameterSpec::string("end_timecode")
                    .required()
                    .describe("End timecode (HH:MM:SS:FF)"),
            )
            .param(ParameterSpec::string("name").required().describe("Clip name")),
    ]
}
