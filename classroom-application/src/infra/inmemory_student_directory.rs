use async_trait::async_trait;
use classroom_domain::error::DomainResult;
use classroom_domain::persist::{StudentLookup, StudentRepository};
use classroom_domain::{Cpf, Student};
use dashmap::DashMap;

/// 进程内学生目录，以 CPF 为键
#[derive(Debug, Default)]
pub struct InMemoryStudentDirectory {
    students: DashMap<Cpf, Student>,
}

impl InMemoryStudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或替换学生，返回被替换的旧记录
    pub fn insert(&self, student: Student) -> Option<Student> {
        self.students.insert(student.cpf().clone(), student)
    }

    pub fn remove(&self, cpf: &Cpf) -> Option<Student> {
        self.students.remove(cpf).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<Student> for InMemoryStudentDirectory {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let directory = Self::new();
        for student in iter {
            directory.insert(student);
        }
        directory
    }
}

impl StudentLookup for InMemoryStudentDirectory {
    fn find_student(&self, cpf: &Cpf) -> Option<Student> {
        self.students.get(cpf).map(|s| s.value().clone())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentDirectory {
    async fn load(&self, cpf: &Cpf) -> DomainResult<Option<Student>> {
        Ok(self.find_student(cpf))
    }

    async fn save(&self, student: &Student) -> DomainResult<()> {
        self.insert(student.clone());
        Ok(())
    }

    async fn delete(&self, cpf: &Cpf) -> DomainResult<bool> {
        Ok(self.remove(cpf).is_some())
    }

    async fn list(&self) -> DomainResult<Vec<Student>> {
        let mut students: Vec<Student> =
            self.students.iter().map(|s| s.value().clone()).collect();
        students.sort_by(|a, b| a.cpf().as_str().cmp(b.cpf().as_str()));
        Ok(students)
    }

    async fn exists(&self, cpf: &Cpf) -> DomainResult<bool> {
        Ok(self.students.contains_key(cpf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_normalized_cpf() {
        let directory: InMemoryStudentDirectory =
            [Student::new("João Silva", "123.456.789-01", "joao@email.com").unwrap()]
                .into_iter()
                .collect();

        let cpf = Cpf::parse("12345678901").unwrap();
        assert_eq!(
            directory.find_student(&cpf).map(|s| s.name().to_string()),
            Some("João Silva".to_string())
        );
        assert!(directory.remove(&cpf).is_some());
        assert!(directory.find_student(&cpf).is_none());
        assert!(directory.is_empty());
    }

    #[tokio::test]
    async fn repository_lists_sorted_by_cpf() {
        let directory = InMemoryStudentDirectory::new();
        let maria = Student::new("Maria Santos", "987.654.321-09", "maria@email.com").unwrap();
        let joao = Student::new("João Silva", "123.456.789-01", "joao@email.com").unwrap();
        directory.save(&maria).await.unwrap();
        directory.save(&joao).await.unwrap();

        let names: Vec<String> = directory
            .list()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, ["João Silva", "Maria Santos"]);

        assert!(directory.delete(maria.cpf()).await.unwrap());
        assert!(!directory.delete(maria.cpf()).await.unwrap());
        assert!(!directory.exists(maria.cpf()).await.unwrap());
        assert_eq!(directory.load(joao.cpf()).await.unwrap(), Some(joao));
    }
}
