use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListImagesQuery {
    #[schema(example = 0)]
    pub offset: Option<u64>,
    #[schema(example = 20)]
    pub limit: Option<u64>,
    pub mime_type: Option<String>,
}
