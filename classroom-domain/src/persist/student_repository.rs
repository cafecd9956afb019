use crate::{
    error::DomainResult as Result,
    student::{Cpf, Student},
};
use async_trait::async_trait;
use std::sync::Arc;

/// 学生仓储：以 CPF 为键维护学生目录
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn load(&self, cpf: &Cpf) -> Result<Option<Student>>;

    /// 新增或覆盖
    async fn save(&self, student: &Student) -> Result<()>;

    /// 删除学生，返回是否存在
    async fn delete(&self, cpf: &Cpf) -> Result<bool>;

    /// 按 CPF 排序返回
    async fn list(&self) -> Result<Vec<Student>>;

    async fn exists(&self, cpf: &Cpf) -> Result<bool> {
        Ok(self.load(cpf).await?.is_some())
    }
}

#[async_trait]
impl<T> StudentRepository for Arc<T>
where
    T: StudentRepository + ?Sized,
{
    async fn load(&self, cpf: &Cpf) -> Result<Option<Student>> {
        (**self).load(cpf).await
    }

    async fn save(&self, student: &Student) -> Result<()> {
        (**self).save(student).await
    }

    async fn delete(&self, cpf: &Cpf) -> Result<bool> {
        (**self).delete(cpf).await
    }

    async fn list(&self) -> Result<Vec<Student>> {
        (**self).list().await
    }

    async fn exists(&self, cpf: &Cpf) -> Result<bool> {
        (**self).exists(cpf).await
    }
}
