use classroom_domain::{ClassId, Cpf};
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type Registry<K> = Arc<DashMap<K, Arc<Mutex<()>>>>;

/// 按键串行化写操作
///
/// 同一键上的读-改-写在持有守卫期间独占执行；不同键互不阻塞。
/// 最后一个守卫释放且无人等待时，键从注册表中移除。
#[derive(Debug)]
pub struct KeyedLocks<K>
where
    K: Eq + Hash,
{
    inner: Registry<K>,
}

/// 课程写锁；克隆目标时只锁目标课程，源课程只读
pub type ClassLocks = KeyedLocks<ClassId>;

/// 学生写锁；需要同时持有课程锁时先取学生锁
pub type StudentLocks = KeyedLocks<Cpf>;

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &K) -> KeyGuard<K> {
        // 先取出 Arc 再等待，避免跨 await 持有 DashMap 分片锁
        let mutex = Arc::clone(self.inner.entry(key.clone()).or_default().value());
        let guard = mutex.lock_owned().await;
        KeyGuard {
            key: key.clone(),
            guard: Some(guard),
            registry: Arc::clone(&self.inner),
        }
    }

    /// 当前登记的键数量
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl KeyedLocks<ClassId> {
    /// 同时锁定多个课程；按标识排序加锁，重复标识只锁一次
    pub async fn lock_all(&self, ids: &[&ClassId]) -> Vec<KeyGuard<ClassId>> {
        let mut ids = ids.to_vec();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        let mut guards = Vec::with_capacity(ids.len());
        for id in ids {
            guards.push(self.lock(id).await);
        }
        guards
    }
}

/// 键锁守卫，释放时清理空闲条目
#[derive(Debug)]
pub struct KeyGuard<K>
where
    K: Eq + Hash,
{
    key: K,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Registry<K>,
}

impl<K> Drop for KeyGuard<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        drop(self.guard.take());
        // 等待者在排队前已克隆 Arc；计数为 1 说明只剩注册表自身持有
        self.registry
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
