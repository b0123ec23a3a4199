mod resolve_encoded_name;

pub use resolve_encoded_name::ResolveEncodedNameUseCase;
