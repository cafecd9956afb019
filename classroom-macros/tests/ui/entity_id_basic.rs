use classroom_macros::entity_id;
use std::collections::HashSet;
use uuid::Uuid;

#[entity_id]
struct GoalId(Uuid);

#[entity_id]
struct ClassId(String);

#[entity_id(debug = false)]
struct TokenId(String);

impl std::fmt::Debug for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenId(..)")
    }
}

fn main() {
    let id = GoalId::new(Uuid::new_v4());
    let _ = format!("{:?}", id);

    // Display/FromStr 互逆
    let parsed: GoalId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);

    // transparent：序列化为内部值
    let class_id = ClassId::from("ESS-2025-1".to_string());
    assert_eq!(serde_json::to_string(&class_id).unwrap(), "\"ESS-2025-1\"");
    assert_eq!(class_id.value(), "ESS-2025-1");

    let mut set = HashSet::new();
    set.insert(class_id.clone());
    assert!(set.contains(&class_id));

    let raw: String = class_id.into();
    assert_eq!(raw, "ESS-2025-1");

    // 手写 Debug 可编译，说明未自动派生
    let _ = format!("{:?}", TokenId::new("t".into()));
}
