pub mod aggregate;
pub mod variant_matrix;
