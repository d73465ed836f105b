use uuid::Uuid;

/// Query for a single movie by its identifier
#[derive(Debug, Clone, Copy)]
pub struct GetMovieByIdQuery {
    pub id: Uuid,
}

impl GetMovieByIdQuery {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
