use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route graph contains no nodes")]
    EmptyGraph,
    #[error("Geometry source error: {0}")]
    GeometrySource(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
