pub mod discovery_output;
