// ABOUTME: Command module aggregator for the docker-check-tags CLI.
// ABOUTME: Re-exports the service and single-image check handlers.

mod check;

pub use check::{
    ServiceOutcome, ServiceStatus, check_image, check_services, columns_for, resolve_image,
};
