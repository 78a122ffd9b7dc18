use m2a_types::{CommandSpec, Domain, HttpMethod, ParameterSpec};

const SOURCES: &str = "/api/v2/connect/sources";
const SOURCE: &str = "/api/v2/connect/sources/{source_id}";
const SUBSCRIBERS: &str = "/api/v2/connect/subscribers";
const SUBSCRIBER: &str = "/api/v2/connect/subscribers/{subscriber_id}";
const SUBSCRIPTIONS: &str = "/api/v2/connect/subscriptions";
const SUBSCRIPTION: &str = "/api/v2/connect/subscriptions/{subscription_id}";
const SCHEDULES: &str = "/api/v2/connect/schedules";
const SCHEDULE: &str = "/api/v2/connect/schedules/{schedule_id}";

fn command(name: &'static str, method: HttpMethod, path: &'static str) -> CommandSpec {
    CommandSpec::new(Domain::Connect, name, method, path)
}

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        command("list_sources", HttpMethod::Get, SOURCES)
            .summary("List all video sources in M2A Connect")
            .action("list sources")
            .param(
                ParameterSpec::string("status")
                    .describe("Filter by status (active, inactive, all)")
                    .one_of(&["active", "inactive", "all"]),
            ),
        command("get_source", HttpMethod::Get, SOURCE)
            .summary("Get details of a specific video source")
            .action("get source")
            .param(ParameterSpec::string("source_id").required().describe("The ID of the source")),
        command("create_source", HttpMethod::Post, SOURCES)
            .summary("Create a new video source in M2A Connect")
            .action("create source")
            .param(ParameterSpec::string("name").required().describe("Name of the source"))
            .param(
                ParameterSpec::string("type")
                    .required()
                    .describe("Source type (rtmp, srt, udp, etc.)")
                    .one_of(&["rtmp", "srt", "udp", "rtp"]),
            )
            .param(ParameterSpec::string("url").required().describe("Source URL or endpoint"))
            .param(ParameterSpec::string("description").describe("Optional description")),
        command("update_source", HttpMethod::Put, SOURCE)
            .summary("Update an existing video source")
            .action("update source")
            .requires_any_field("at least one field to update is required")
            .param(ParameterSpec::string("source_id").required().describe("The ID of the source"))
            .param(ParameterSpec::string("name").describe("New name for the source"))
            .param(ParameterSpec::string("url").describe("New source URL"))
            .param(ParameterSpec::string("description").describe("New description")),
        command("delete_source", HttpMethod::Delete, SOURCE)
            .summary("Delete a video source")
            .action("delete source")
            .acknowledges_deletion("Source")
            .param(
                ParameterSpec::string("source_id")
                    .required()
                    .describe("The ID of the source to delete"),
            ),
        command("list_subscribers", HttpMethod::Get, SUBSCRIBERS)
            .summary("List all subscribers in M2A Connect")
            .action("list subscribers")
            .param(ParameterSpec::number("limit").describe("Maximum number of results to return"))
            .param(ParameterSpec::number("offset").describe("Offset for pagination")),
        command("get_subscriber", HttpMethod::Get, SUBSCRIBER)
            .summary("Get details of a specific subscriber")
            .action("get subscriber")
            .param(
                ParameterSpec::string("subscriber_id")
                    .required()
                    .describe("The ID of the subscriber"),
            ),
        command("create_subscriber", HttpMethod::Post, SUBSCRIBERS)
            .summary("Create a new subscriber")
            .action("create subscriber")
            .param(ParameterSpec::string("name").required().describe("Subscriber name"))
            .param(ParameterSpec::string("email").required().describe("Subscriber email"))
            .param(ParameterSpec::string("organization").describe("Organization name")),
        command("list_subscriptions", HttpMethod::Get, SUBSCRIPTIONS)
            .summary("List all subscription packages")
            .action("list subscriptions"),
        command("get_subscription", HttpMethod::Get, SUBSCRIPTION)
            .summary("Get details of a specific subscription package")
            .action("get subscription")
            .param(
                ParameterSpec::string("subscription_id")
                    .required()
                    .describe("The ID of the subscription"),
            ),
        command("create_subscription", HttpMethod::Post, SUBSCRIPTIONS)
            .summary("Create a new subscription package")
            .action("create subscription")
            .param(ParameterSpec::string("name").required().describe("Subscription name"))
            .param(ParameterSpec::string("subscriber_id").required().describe("Subscriber ID"))
            .param(
                ParameterSpec::string("source_ids")
                    .required()
                    .describe("Comma-separated list of source IDs"),
            ),
        command("list_schedules", HttpMethod::Get, SCHEDULES)
            .summary("List all scheduled events")
            .action("list schedules")
            .param(ParameterSpec::string("start_date").describe("Filter by start date (ISO 8601 format)"))
            .param(ParameterSpec::string("end_date").describe("Filter by end date (ISO 8601 format)")),
        command("get_schedule", HttpMethod::Get, SCHEDULE)
            .summary("Get details of a specific schedule")
            .action("get schedule")
            .param(ParameterSpec::string("schedule_id").required().describe("The ID of the schedule")),
        command("create_schedule", HttpMethod::Post, SCHEDULES)
            .summary("Create a new scheduled event")
            .action("create schedule")
            .param(ParameterSpec::string("name").required().describe("Schedule name"))
            .param(ParameterSpec::string("source_id").required().describe("Source ID"))
            .param(
                ParameterSpec::string("start_time")
                    .required()
                    .describe("Start time (ISO 8601 format)"),
            )
            .param(ParameterSpec::string("end_time").required().describe("End time (ISO 8601 format)")),
    ]
}
