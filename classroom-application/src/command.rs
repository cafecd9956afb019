/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改课程聚合的状态。
/// - 建议保持语义化的“动宾结构”命名，如 `AddGoal`、`CloneGoals`。
/// - `Output` 为命令执行后返回给调用方的结果（通常是变更后的记录）。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（常量字符串，不随重构变化）
    const NAME: &'static str;

    type Output: Send + 'static;
}
