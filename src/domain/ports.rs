use crate::utils::error::Result;
use async_trait::async_trait;

/// Line-oriented text channel the interactive session talks through.
#[async_trait]
pub trait Console: Send {
    /// Next input line without its terminator, or `None` at end of input.
    async fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes `text` as-is; callers add their own newlines.
    async fn write(&mut self, text: &str) -> Result<()>;

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.write(line).await?;
        self.write("\n").await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn decode_strategy(&self) -> crate::domain::model::DecodeStrategy;
    fn verbose(&self) -> bool;
}
