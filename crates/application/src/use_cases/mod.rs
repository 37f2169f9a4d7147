pub mod domains;

pub use domains::ResolveDomainUseCase;
