use enclose_core::run_all;

#[test]
fn full_transcript() {
    let mut buf = Vec::new();
    run_all(&mut buf).unwrap();

    insta::assert_snapshot!(String::from_utf8(buf).unwrap(), @r"
    myFunction:
    100
    counter:
    0
    1
    calculatorModule:
    0
    10
    5
    ");
}

#[test]
fn run_all_is_deterministic() {
    let mut first = Vec::new();
    run_all(&mut first).unwrap();

    let mut second = Vec::new();
    run_all(&mut second).unwrap();

    assert_eq!(first, second);
}
