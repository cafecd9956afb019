use anyhow::Result as AnyResult;
use async_trait::async_trait;
use classroom_domain::error::{DomainError, DomainResult};
use classroom_domain::persist::{AggregateRepository, StudentLookup};
use classroom_domain::weight_validator;
use classroom_domain::{Class, ClassId, Goal, GoalId, GoalPatch, Grade, Student};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// 以 JSON 形式保存课程的仓储，读取时通过学生目录重建
#[derive(Clone)]
struct JsonRepo {
    rows: Arc<Mutex<HashMap<String, Value>>>,
    students: Arc<Vec<Student>>,
}

impl JsonRepo {
    fn new(students: Vec<Student>) -> Self {
        Self {
            rows: Arc::default(),
            students: Arc::new(students),
        }
    }
}

#[async_trait]
impl AggregateRepository<Class> for JsonRepo {
    async fn load(&self, id: &ClassId) -> DomainResult<Option<Class>> {
        let row = self.rows.lock().unwrap().get(id.as_str()).cloned();
        row.map(|v| Class::from_json(v, &*self.students as &dyn StudentLookup))
            .transpose()
    }

    async fn save(&self, class: &Class) -> DomainResult<()> {
        let value = class.to_json()?;
        self.rows
            .lock()
            .unwrap()
            .insert(class.id().to_string(), value);
        Ok(())
    }

    async fn delete(&self, id: &ClassId) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().remove(id.as_str()).is_some())
    }

    async fn list(&self) -> DomainResult<Vec<Class>> {
        let rows: Vec<Value> = self.rows.lock().unwrap().values().cloned().collect();
        rows.into_iter()
            .map(|v| Class::from_json(v, &*self.students as &dyn StudentLookup))
            .collect()
    }
}

fn joao() -> Student {
    Student::new("João Silva", "123.456.789-01", "joao@email.com").unwrap()
}

#[test]
fn clone_into_empty_class_then_mutate_copy() {
    let mut a = Class::new("ESS", 1, 2025);
    a.add_goal(Goal::new("Exercises", 40.0));
    a.add_goal(Goal::new("Theory", 60.0));
    let mut b = Class::new("ESS", 2, 2025);

    for goal in a.clone_goals() {
        b.add_goal(goal);
    }

    assert_eq!(b.goals().len(), 2);
    let a_ids: HashSet<&GoalId> = a.goals().iter().map(Goal::id).collect();
    for (from_a, from_b) in a.goals().iter().zip(b.goals()) {
        assert!(!a_ids.contains(from_b.id()));
        assert_eq!(from_b.description(), from_a.description());
        assert_eq!(from_b.weight(), from_a.weight());
    }

    let first = b.goals()[0].id().clone();
    b.update_goal(
        &first,
        GoalPatch::builder()
            .description("Modified Exercises".to_string())
            .build(),
    )
    .unwrap();

    assert_eq!(a.goals()[0].description(), "Exercises");
    assert_eq!(b.goals()[0].description(), "Modified Exercises");
}

#[test]
fn weight_checks_are_explicit_at_the_call_site() {
    let mut class = Class::new("ESS", 1, 2025);
    for (description, weight) in [("Exercises", 30.0), ("Theory", 70.0)] {
        weight_validator::validate_description(description).unwrap();
        weight_validator::validate_weight(weight).unwrap();
        weight_validator::validate_total_weight(class.goals(), Some(weight)).unwrap();
        class.add_goal(Goal::new(description, weight));
    }

    let err = weight_validator::validate_total_weight(class.goals(), Some(10.0)).unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(class.goals().len(), 2);
}

#[tokio::test]
async fn clone_goals_across_persisted_classes() -> AnyResult<()> {
    let repo = JsonRepo::new(vec![joao()]);

    let mut source = Class::new("ESS", 1, 2025);
    source.add_goal(Goal::new("Exercises", 40.0));
    source.add_goal(Goal::new("Theory", 60.0));
    source.add_enrollment(joao())?;
    source.record_evaluation(joao().cpf(), "Exercises", Some(Grade::Ma))?;
    repo.save(&source).await?;
    repo.save(&Class::new("ESS", 2, 2025)).await?;

    let source_id = ClassId::derive("ESS", 2025, 1);
    let destination_id = ClassId::derive("ESS", 2025, 2);
    assert!(repo.exists(&destination_id).await?);

    let source = repo.load(&source_id).await?.expect("source exists");
    let mut destination = repo.load(&destination_id).await?.expect("destination exists");
    let copies = source.clone_goals();
    let count = copies.len();
    for goal in copies {
        destination.add_goal(goal);
    }
    repo.save(&destination).await?;

    let reloaded = repo.load(&destination_id).await?.expect("destination exists");
    assert_eq!(count, 2);
    assert_eq!(reloaded.goals().len(), 2);
    assert!(reloaded.enrollments().is_empty());
    assert_eq!(repo.load(&source_id).await?, Some(source));

    assert_eq!(repo.list().await?.len(), 2);
    assert!(repo.delete(&source_id).await?);
    assert!(!repo.exists(&source_id).await?);
    Ok(())
}
