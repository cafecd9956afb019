use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 关联追踪 `correlation_id`，写入处理器的每条日志；
/// - 执行者 `actor_id`，用于审计。
///
/// 典型用法：
/// ```rust
/// use classroom_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("prof-ana".to_string())
///     .build();
/// assert_eq!(ctx.correlation_id(), "cor-123");
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct AppContext {
    pub correlation_id: Option<String>,
    pub actor_id: Option<String>,
}

impl AppContext {
    /// 未设置时返回 `-`，便于日志字段对齐
    pub fn correlation_id(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("-")
    }

    pub fn actor_id(&self) -> &str {
        self.actor_id.as_deref().unwrap_or("-")
    }
}
