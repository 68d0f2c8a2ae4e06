//! A Tiny Task-Runner DSL: named tasks, dependencies, topological runs
//!
//! Run with: cargo run --bin p23_tasks

use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    #[error("unknown task: {0}")]
    Unknown(String),

    #[error("dependency cycle involving: {0}")]
    Cycle(String),
}

type TaskFn = Box<dyn Fn() -> String>;

struct Task {
    description: String,
    dependencies: Vec<String>,
    action: TaskFn,
}

/// A registry of named tasks with declared dependencies. Running a task
/// runs its dependency closure first, each task at most once.
#[derive(Default)]
pub struct TaskRunner {
    tasks: HashMap<String, Task>,
    default_task: Option<String>,
}

impl TaskRunner {
    pub fn new() -> Self {
        TaskRunner::default()
    }

    pub fn task(
        &mut self,
        name: &str,
        description: &str,
        dependencies: &[&str],
        action: impl Fn() -> String + 'static,
    ) -> &mut Self {
        self.tasks.insert(
            name.to_string(),
            Task {
                description: description.to_string(),
                dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
                action: Box::new(action),
            },
        );
        self
    }

    pub fn set_default(&mut self, name: &str) {
        self.default_task = Some(name.to_string());
    }

    /// Every registered task with its description, sorted by name.
    pub fn catalogue(&self) -> Vec<(String, String)> {
        let mut listing: Vec<(String, String)> = self
            .tasks
            .iter()
            .map(|(name, task)| (name.clone(), task.description.clone()))
            .collect();
        listing.sort();
        listing
    }

    /// Run a task and everything it depends on, dependencies first.
    /// Returns the labels of executed tasks in execution order.
    pub fn run(&self, name: &str) -> Result<Vec<String>, TaskError> {
        let mut executed = Vec::new();
        let mut done = HashSet::new();
        let mut in_progress = HashSet::new();
        self.run_inner(name, &mut executed, &mut done, &mut in_progress)?;
        Ok(executed)
    }

    /// Run the configured default task.
    pub fn run_default(&self) -> Result<Vec<String>, TaskError> {
        match &self.default_task {
            Some(name) => self.run(name),
            None => Err(TaskError::Unknown("(no default set)".to_string())),
        }
    }

    fn run_inner(
        &self,
        name: &str,
        executed: &mut Vec<String>,
        done: &mut HashSet<String>,
        in_progress: &mut HashSet<String>,
    ) -> Result<(), TaskError> {
        if done.contains(name) {
            return Ok(());
        }
        if !in_progress.insert(name.to_string()) {
            return Err(TaskError::Cycle(name.to_string()));
        }

        let task = self
            .tasks
            .get(name)
            .ok_or_else(|| TaskError::Unknown(name.to_string()))?;

        for dependency in &task.dependencies {
            self.run_inner(dependency, executed, done, in_progress)?;
        }

        let output = (task.action)();
        println!("  [{}] {}", name, output);
        executed.push(name.to_string());

        in_progress.remove(name);
        done.insert(name.to_string());
        Ok(())
    }
}

fn build_runner() -> TaskRunner {
    let mut runner = TaskRunner::new();
    runner.task("clean", "Remove build artifacts", &[], || {
        "cleaning...".to_string()
    });
    runner.task("compile", "Compile sources", &["clean"], || {
        "compiling...".to_string()
    });
    runner.task("test", "Run tests", &["compile"], || {
        "running tests...".to_string()
    });
    // Namespaced names keep related tasks grouped, rake-style.
    runner.task("db:migrate", "Migrate database", &[], || {
        "migrating database...".to_string()
    });
    runner.task("release", "Full release pipeline", &["test", "db:migrate"], || {
        "packaging release...".to_string()
    });
    runner.set_default("test");
    runner
}

fn main() -> Result<(), TaskError> {
    println!("=== Task Runner Demo ===\n");

    let runner = build_runner();

    println!("catalogue:");
    for (name, description) in runner.catalogue() {
        println!("  {:12} {}", name, description);
    }

    println!("\nrun(\"release\"):");
    let order = runner.run("release")?;
    println!("execution order: {:?}", order);

    println!("\nrun_default():");
    runner.run_default()?;

    println!("\nunknown task: {:?}", runner.run("deploy").unwrap_err());

    let mut cyclic = TaskRunner::new();
    cyclic.task("a", "first", &["b"], || "a".to_string());
    cyclic.task("b", "second", &["a"], || "b".to_string());
    println!("cycle detected: {:?}", cyclic.run("a").unwrap_err());

    println!("\n=== Key Points ===");
    println!("1. Tasks are named closures plus declared dependencies");
    println!("2. Execution is a depth-first topological walk, each task once");
    println!("3. Cycles and unknown names are typed errors, not hangs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_run_first_and_once() {
        let runner = build_runner();
        let order = runner.run("release").expect("runs");
        assert_eq!(order, vec!["clean", "compile", "test", "db:migrate", "release"]);
    }

    #[test]
    fn shared_dependency_runs_once() {
        let mut runner = TaskRunner::new();
        runner.task("base", "shared", &[], || "base".to_string());
        runner.task("left", "l", &["base"], || "left".to_string());
        runner.task("right", "r", &["base"], || "right".to_string());
        runner.task("top", "t", &["left", "right"], || "top".to_string());

        let order = runner.run("top").expect("runs");
        assert_eq!(order.iter().filter(|n| n.as_str() == "base").count(), 1);
        assert_eq!(order.last().map(String::as_str), Some("top"));
    }

    #[test]
    fn cycle_is_reported() {
        let mut runner = TaskRunner::new();
        runner.task("a", "", &["b"], || String::new());
        runner.task("b", "", &["a"], || String::new());
        assert!(matches!(runner.run("a"), Err(TaskError::Cycle(_))));
    }

    #[test]
    fn unknown_task_is_reported() {
        let runner = TaskRunner::new();
        assert_eq!(
            runner.run("ghost"),
            Err(TaskError::Unknown("ghost".to_string()))
        );
    }

    #[test]
    fn default_task_runs() {
        let runner = build_runner();
        let order = runner.run_default().expect("default runs");
        assert_eq!(order.last().map(String::as_str), Some("test"));
    }
}
