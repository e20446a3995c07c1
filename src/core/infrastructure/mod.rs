pub mod uuid_issuer;
