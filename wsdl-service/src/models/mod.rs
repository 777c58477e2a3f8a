pub mod soap_response;

pub use soap_response::SoapResponse;
