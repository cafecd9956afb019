//! 聚合仓储协议
//!
//! 以聚合的自然键整体读写聚合；保存即覆盖，单次保存要么完整生效要么不生效。
//!
use crate::{aggregate::Aggregate, error::DomainResult as Result};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AggregateRepository<A>: Send + Sync
where
    A: Aggregate,
{
    async fn load(&self, id: &A::Id) -> Result<Option<A>>;

    async fn save(&self, aggregate: &A) -> Result<()>;

    /// 删除聚合，返回是否存在
    async fn delete(&self, id: &A::Id) -> Result<bool>;

    async fn list(&self) -> Result<Vec<A>>;

    async fn exists(&self, id: &A::Id) -> Result<bool> {
        Ok(self.load(id).await?.is_some())
    }
}

#[async_trait]
impl<A, T> AggregateRepository<A> for Arc<T>
where
    A: Aggregate,
    T: AggregateRepository<A> + ?Sized,
{
    async fn load(&self, id: &A::Id) -> Result<Option<A>> {
        (**self).load(id).await
    }

    async fn save(&self, aggregate: &A) -> Result<()> {
        (**self).save(aggregate).await
    }

    async fn delete(&self, id: &A::Id) -> Result<bool> {
        (**self).delete(id).await
    }

    async fn list(&self) -> Result<Vec<A>> {
        (**self).list().await
    }

    async fn exists(&self, id: &A::Id) -> Result<bool> {
        (**self).exists(id).await
    }
}
