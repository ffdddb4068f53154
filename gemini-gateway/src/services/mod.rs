pub mod frontend;
pub mod metrics;
pub mod model_client;
pub mod providers;

pub use frontend::StaticAssets;
pub use metrics::{get_metrics, init_metrics};
pub use model_client::{GeneratedAnswer, ModelClient, ModelClientState, UpstreamFailure};
