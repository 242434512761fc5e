use empstats::domain::employee::RawEmployee;
use empstats::testkit::domain::envelope;
use httpmock::prelude::*;
use httpmock::Mock;

/// Serve `records` from `GET /employees`.
pub fn serve<'a>(server: &'a MockServer, records: &[RawEmployee]) -> Mock<'a> {
    let body = envelope(records);
    server.mock(|when, then| {
        when.method(GET).path("/employees");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

/// Answer `GET /employees` with `status` and a raw body.
pub fn respond<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/employees");
        then.status(status).body(body);
    })
}
