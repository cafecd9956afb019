use async_trait::async_trait;
use classroom_domain::error::DomainResult;
use classroom_domain::persist::{AggregateRepository, StudentLookup};
use classroom_domain::{Class, ClassId};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

/// 进程内课程仓储
///
/// 以 `Class::to_json` 的形状保存每个课程，读取时通过学生目录重建选课，
/// 与文件持久化保持相同的序列化往返。
pub struct InMemoryClassRepository {
    rows: DashMap<ClassId, Value>,
    students: Arc<dyn StudentLookup>,
}

impl InMemoryClassRepository {
    pub fn new(students: Arc<dyn StudentLookup>) -> Self {
        Self {
            rows: DashMap::new(),
            students,
        }
    }

    fn restore(&self, value: Value) -> DomainResult<Class> {
        Class::from_json(value, self.students.as_ref())
    }
}

#[async_trait]
impl AggregateRepository<Class> for InMemoryClassRepository {
    async fn load(&self, id: &ClassId) -> DomainResult<Option<Class>> {
        let row = self.rows.get(id).map(|r| r.value().clone());
        row.map(|value| self.restore(value)).transpose()
    }

    async fn save(&self, class: &Class) -> DomainResult<()> {
        let value = class.to_json()?;
        self.rows.insert(class.id(), value);
        Ok(())
    }

    async fn delete(&self, id: &ClassId) -> DomainResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }

    /// 按课程标识排序返回
    async fn list(&self) -> DomainResult<Vec<Class>> {
        let mut rows: Vec<(ClassId, Value)> = self
            .rows
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        rows.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        rows.into_iter()
            .map(|(_, value)| self.restore(value))
            .collect()
    }

    async fn exists(&self, id: &ClassId) -> DomainResult<bool> {
        Ok(self.rows.contains_key(id))
    }
}
