use crate::student::{Cpf, Student};
use std::sync::Arc;

/// 学生查询能力：按 CPF 解析学生记录
pub trait StudentLookup: Send + Sync {
    fn find_student(&self, cpf: &Cpf) -> Option<Student>;
}

impl StudentLookup for [Student] {
    fn find_student(&self, cpf: &Cpf) -> Option<Student> {
        self.iter().find(|s| s.cpf() == cpf).cloned()
    }
}

impl StudentLookup for Vec<Student> {
    fn find_student(&self, cpf: &Cpf) -> Option<Student> {
        self.as_slice().find_student(cpf)
    }
}

impl<T> StudentLookup for Arc<T>
where
    T: StudentLookup + ?Sized,
{
    fn find_student(&self, cpf: &Cpf) -> Option<Student> {
        (**self).find_student(cpf)
    }
}
