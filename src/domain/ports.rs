use crate::domain::model::{RawBlockList, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn doh_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawBlockList>>;
    async fn transform(&self, data: Vec<RawBlockList>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
