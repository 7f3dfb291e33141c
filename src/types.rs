#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct TestResult {
    pub prompt: String,
    pub category: String,
    pub status: TestStatus,
    pub reason: Option<String>,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total: usize,  // Total number of evaluated prompts
    pub passed: usize, // Number of passed prompts
    pub failed: usize, // Number of failed prompts
    pub results: Vec<TestResult>,
}
