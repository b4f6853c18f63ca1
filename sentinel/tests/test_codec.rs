use std::net::{Ipv4Addr, Ipv6Addr};

use sentinel::codec::{decode_args, encode_args, ArgEncoder, ArgValue, Cred, SockAddr};
use sentinel::domain::DecodeError;
use sentinel::event::Event;
use sentinel::registry::EventRegistry;

fn registry() -> &'static EventRegistry {
    EventRegistry::global()
}

fn decode(name: &str, payload: &[u8]) -> Result<Event, DecodeError> {
    let id = registry().id_of(name)?;
    Event::decode(registry(), id, 1_700_000_000_000_000_000, "test", payload)
}

#[test]
fn test_read_payload() {
    let payload = ArgEncoder::new().int(3).ulong(0x7ffd_1000).ulong(4096).finish();
    let event = decode("read", &payload).unwrap();

    assert_eq!(event.args_num, 3);
    assert_eq!(event.arg("fd"), Some(&ArgValue::Int(3)));
    assert_eq!(event.arg("buf"), Some(&ArgValue::Pointer(0x7ffd_1000)));
    assert_eq!(event.arg("count"), Some(&ArgValue::Size(4096)));
}

#[test]
fn test_read_payload_one_byte_short() {
    let mut payload = ArgEncoder::new().int(3).ulong(0).ulong(4096).finish();
    payload.pop();
    let err = decode("read", &payload).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedEof { ref arg, needed: 8, remaining: 7 } if arg == "count"));
}

#[test]
fn test_execve_payload() {
    let payload = ArgEncoder::new()
        .str("/usr/bin/env")
        .str_arr(&["env", "-i", "sh"])
        .str_arr(&["PATH=/usr/bin"])
        .finish();
    let event = decode("execve", &payload).unwrap();

    assert_eq!(event.arg("pathname"), Some(&ArgValue::Str("/usr/bin/env".into())));
    assert_eq!(
        event.arg("argv"),
        Some(&ArgValue::StrArr(vec!["env".into(), "-i".into(), "sh".into()]))
    );
    assert_eq!(event.arg("envp"), Some(&ArgValue::StrArr(vec!["PATH=/usr/bin".into()])));
}

#[test]
fn test_connect_payload_ipv6() {
    let addr = SockAddr::Inet6 {
        sin6_port: 8080,
        sin6_flowinfo: 0,
        sin6_addr: Ipv6Addr::LOCALHOST,
        sin6_scope_id: 0,
    };
    let payload = ArgEncoder::new().int(5).sockaddr(&addr).int(28).finish();
    let event = decode("connect", &payload).unwrap();
    assert_eq!(event.arg("addr"), Some(&ArgValue::SockAddr(addr)));
}

#[test]
fn test_commit_creds_payload() {
    let old = Cred { uid: 1000, euid: 1000, ..Cred::default() };
    let new = Cred { uid: 1000, euid: 0, cap_effective: 0x1ff_ffff_ffff, ..Cred::default() };
    let payload = ArgEncoder::new().cred(&old).cred(&new).int(105).finish();
    let event = decode("commit_creds", &payload).unwrap();

    assert_eq!(event.arg("old_cred"), Some(&ArgValue::Cred(old)));
    assert_eq!(event.arg("new_cred"), Some(&ArgValue::Cred(new)));
    assert_eq!(event.arg("syscall"), Some(&ArgValue::Int(105)));
}

#[test]
fn test_pipe_payload() {
    let payload = ArgEncoder::new().int_arr2([3, 4]).finish();
    let event = decode("pipe", &payload).unwrap();
    assert_eq!(event.arg("pipefd"), Some(&ArgValue::IntArr2([3, 4])));
}

#[test]
fn test_security_bprm_check_payload() {
    let values = vec![ArgValue::Str("/bin/ls".into()), ArgValue::Dev(0x803), ArgValue::Ulong(131_074)];
    let event = decode("security_bprm_check", &encode_args(&values)).unwrap();
    let decoded: Vec<ArgValue> = event.args.into_iter().map(|a| a.value).collect();
    assert_eq!(decoded, values);
}

#[test]
fn test_rendered_event_json() {
    let addr = SockAddr::Inet { sin_port: 53, sin_addr: Ipv4Addr::new(1, 1, 1, 1) };
    let payload = ArgEncoder::new().int(7).sockaddr(&addr).int(16).finish();
    let event = decode("connect", &payload).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["eventName"], "connect");
    assert_eq!(json["args"][1]["name"], "addr");
    assert_eq!(json["args"][1]["type"], "struct sockaddr*");
    assert_eq!(json["args"][1]["value"]["sa_family"], "AF_INET");
    assert_eq!(json["args"][1]["value"]["sin_port"], 53);
    assert_eq!(json["args"][1]["value"]["sin_addr"], "1.1.1.1");
}

#[test]
fn test_argless_event_rejects_payload() {
    let err = decode("getpid", &[0, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, DecodeError::TrailingBytes(4)));
}

#[test]
fn test_every_schema_decodes_its_own_encoding() {
    // One representative value per tag, laid out by each schema
    for event in registry().iter() {
        let schema = registry().params(event.id).unwrap();
        let values: Vec<ArgValue> = schema
            .iter()
            .map(|arg| sample_value(arg.arg_type()))
            .collect();
        let decoded = decode_args(schema, &encode_args(&values))
            .unwrap_or_else(|e| panic!("{}: {e}", event.name));
        assert_eq!(decoded, values, "{}", event.name);
    }
}

fn sample_value(ty: sentinel_common::ArgType) -> ArgValue {
    use sentinel_common::ArgType;
    match ty {
        ArgType::None => ArgValue::None,
        ArgType::Int => ArgValue::Int(-1),
        ArgType::Uint => ArgValue::Uint(1),
        ArgType::Long => ArgValue::Long(-2),
        ArgType::Ulong => ArgValue::Ulong(2),
        ArgType::Off => ArgValue::Off(512),
        ArgType::Mode => ArgValue::Mode(0o755),
        ArgType::Dev => ArgValue::Dev(0x801),
        ArgType::Size => ArgValue::Size(64),
        ArgType::Pointer => ArgValue::Pointer(0xffff_8000_0000_0000),
        ArgType::Str => ArgValue::Str("/tmp/x".into()),
        ArgType::StrArr => ArgValue::StrArr(vec!["a".into(), String::new()]),
        ArgType::SockAddr => ArgValue::SockAddr(SockAddr::Unix { sun_path: "/run/s".into() }),
        ArgType::Bytes => ArgValue::Bytes(vec![0x7f, b'E', b'L', b'F']),
        ArgType::U16 => ArgValue::U16(0o600),
        ArgType::Cred => ArgValue::Cred(Cred { uid: 1, ..Cred::default() }),
        ArgType::IntArr2 => ArgValue::IntArr2([1, 2]),
        ArgType::ArgsArr => ArgValue::ArgsArr(vec![1, 2, 3]),
    }
}
