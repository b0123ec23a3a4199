pub mod dns;

pub use dns::ResolveEncodedNameUseCase;
