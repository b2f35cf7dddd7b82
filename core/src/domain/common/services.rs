/// Service aggregate wiring the domain's ports together. Domain service
/// traits are implemented for this struct with the matching bounds.
#[derive(Clone)]
pub struct Service<S, I> {
    pub object_storage: S,
    pub image_repository: I,
}

impl<S, I> Service<S, I> {
    pub fn new(object_storage: S, image_repository: I) -> Self {
        Self {
            object_storage,
            image_repository,
        }
    }
}
