use ipname_domain::{Answer, QueryClass, Question, RecordType, ANSWER_TTL};
use std::net::IpAddr;

fn question(name: &str, record_type: RecordType) -> Question {
    Question::new(name, record_type, QueryClass::Internet)
}

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_a_query_for_ipv4_yields_one_record() {
    let answer = Answer::build(question("1.2.3.4.ip.test.", RecordType::A), ip("1.2.3.4"));

    let record = answer.record.expect("A record");
    assert_eq!(&*record.name, "1.2.3.4.ip.test.");
    assert_eq!(record.ttl, ANSWER_TTL);
    assert_eq!(record.ttl, 86_400);
    assert_eq!(record.address, ip("1.2.3.4"));
    assert!(record.address.is_ipv4());
}

#[test]
fn test_aaaa_query_for_ipv6_yields_one_record() {
    let answer = Answer::build(question("2000--1.ip.test.", RecordType::AAAA), ip("2000::1"));

    let record = answer.record.expect("AAAA record");
    assert_eq!(record.address, ip("2000::1"));
    assert!(record.address.is_ipv6());
}

#[test]
fn test_family_mismatch_yields_empty_answer() {
    let v4_as_aaaa = Answer::build(question("1.2.3.4.ip.test.", RecordType::AAAA), ip("1.2.3.4"));
    assert!(v4_as_aaaa.record.is_none());
    assert_eq!(v4_as_aaaa.decoded, ip("1.2.3.4"));

    let v6_as_a = Answer::build(question("2000--1.ip.test.", RecordType::A), ip("2000::1"));
    assert!(v6_as_a.record.is_none());
}

#[test]
fn test_other_types_yield_empty_answer() {
    for code in [2u16, 5, 15, 16, 255] {
        let answer = Answer::build(
            question("1.2.3.4.ip.test.", RecordType::from_code(code)),
            ip("1.2.3.4"),
        );
        assert!(answer.record.is_none(), "type {} should have no records", code);
    }
}

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::from_code(1), RecordType::A);
    assert_eq!(RecordType::from_code(28), RecordType::AAAA);
    assert_eq!(RecordType::from_code(16), RecordType::Other(16));
    assert_eq!(RecordType::Other(16).code(), 16);
    assert_eq!(RecordType::AAAA.to_string(), "AAAA");
    assert_eq!(RecordType::Other(99).to_string(), "TYPE99");
}
