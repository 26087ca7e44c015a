use thiserror::Error;

/// Failures while building a random graph.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum GenerationError {
    #[error("{vertices} vertices is below the minimum of {minimum} for the {policy} policy")]
    TooFewVertices {
        vertices: usize,
        minimum: usize,
        policy: &'static str,
    },

    #[error("degree-targeted generation still infeasible after {attempts} attempts")]
    Infeasible { attempts: usize },
}

/// Failures while answering a widest-path query.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PathError {
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    // Field can't be called `source`, thiserror would derive a cause chain
    // from it.
    #[error("no path from {from} to {to}")]
    NoPath { from: usize, to: usize },
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::GenerationError;
    use super::PathError;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            GenerationError::TooFewVertices {
                vertices: 2,
                minimum: 3,
                policy: "degree_targeted",
            }
            .to_string(),
            "2 vertices is below the minimum of 3 for the degree_targeted policy"
        );
        assert_eq!(
            GenerationError::Infeasible { attempts: 50 }.to_string(),
            "degree-targeted generation still infeasible after 50 attempts"
        );
        assert_eq!(
            PathError::InvalidVertex {
                vertex: 9,
                vertex_count: 5
            }
            .to_string(),
            "vertex 9 out of range for a graph with 5 vertices"
        );
        assert_eq!(
            PathError::NoPath { from: 0, to: 4 }.to_string(),
            "no path from 0 to 4"
        );
    }

    #[test]
    fn every_variant_is_a_root_error() {
        assert!(
            GenerationError::Infeasible { attempts: 50 }
                .source()
                .is_none()
        );
        assert!(PathError::NoPath { from: 0, to: 4 }.source().is_none());
    }
}
