//! Protocol front end against realistic host traffic.

use plantbot::app::commands::AppCommand;
use plantbot::protocol::{CommandProtocol, Inbound, LINE_CAPACITY, Response};
use plantbot::sensors::SensorReadings;

fn feed(proto: &mut CommandProtocol, data: &[u8]) -> Vec<Inbound> {
    data.iter().filter_map(|&b| proto.feed(b)).collect()
}

#[test]
fn host_session_transcript() {
    let mut proto = CommandProtocol::new();
    let out = feed(
        &mut proto,
        b"status\r\nCMD:WATER\r\n  pump_on  \nping\nCMD:STATUS\n",
    );
    assert_eq!(
        out,
        vec![
            Inbound::Command(AppCommand::Status),
            Inbound::Command(AppCommand::Water),
            Inbound::Command(AppCommand::Water),
            Inbound::Ignored {
                len: 4,
                truncated: false
            },
            Inbound::Command(AppCommand::Status),
        ]
    );
}

#[test]
fn byte_at_a_time_delivery_matches_bulk() {
    let data = b"PUMP\r\nSTATUS\n";
    let mut bulk = CommandProtocol::new();
    let expected = feed(&mut bulk, data);

    let mut trickle = CommandProtocol::new();
    let mut got = Vec::new();
    for chunk in data.chunks(1) {
        got.extend(feed(&mut trickle, chunk));
    }
    assert_eq!(got, expected);
}

#[test]
fn trailing_no_break_space_is_not_padding() {
    let mut proto = CommandProtocol::new();
    assert_eq!(
        feed(&mut proto, "PUMP\u{a0}\n".as_bytes()),
        vec![Inbound::Ignored {
            len: 6,
            truncated: false
        }]
    );
    assert_eq!(
        feed(&mut proto, b"PUMP \n"),
        vec![Inbound::Command(AppCommand::Water)]
    );
}

#[test]
fn line_exactly_at_capacity_is_not_truncated() {
    let mut proto = CommandProtocol::new();
    let mut data = vec![b'A'; LINE_CAPACITY];
    data.push(b'\n');
    assert_eq!(
        feed(&mut proto, &data),
        vec![Inbound::Ignored {
            len: LINE_CAPACITY,
            truncated: false
        }]
    );
}

#[test]
fn status_reply_is_parseable_by_host() {
    let readings = SensorReadings {
        temperature: 21,
        light: 87,
        soil: 40,
        water: 63,
    };
    let line = Response::Sensors {
        readings,
        pump_active: false,
    }
    .to_string();

    let fields: Vec<(&str, u8)> = line
        .strip_prefix("SENS% ")
        .unwrap()
        .split(' ')
        .map(|kv| {
            let (k, v) = kv.split_once('=').unwrap();
            (k, v.parse().unwrap())
        })
        .collect();
    assert_eq!(
        fields,
        [("T", 21), ("L", 87), ("S", 40), ("W", 63), ("PUMP", 0)]
    );
}
