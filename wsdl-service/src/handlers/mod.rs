pub mod wsdl;

pub use wsdl::{handle_soap_request, XML_CONTENT_TYPE};
