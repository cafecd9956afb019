use classroom_macros::value_object;

#[value_object]
struct Email(String);

#[value_object(default = true)]
struct Counter {
    value: i64,
}

#[value_object(debug = false)]
struct Secret(String);

#[value_object]
enum Level {
    Low,
    High,
}

fn main() {
    let a = Email("a@b.com".into());
    let b = a.clone();
    assert_eq!(a, b);
    let _ = format!("{:?}", a);

    let c = Counter::default();
    assert_eq!(c, Counter { value: 0 });

    let _ = Secret("s".into());

    let json = serde_json::to_string(&Level::High).unwrap();
    let back: Level = serde_json::from_str(&json).unwrap();
    assert!(back == Level::High);
    assert!(Level::Low != Level::High);
}
