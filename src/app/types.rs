#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}
