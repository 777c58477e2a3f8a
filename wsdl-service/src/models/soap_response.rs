use crate::dtos::InputData;
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

const INDENT_WIDTH: usize = 2;

/// SOAP-shaped echo of an accepted request: a bare `<soapResponse>` element
/// without envelope or namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "soapResponse", rename_all = "camelCase")]
pub struct SoapResponse {
    pub bik: String,
    pub from_date: String,
    pub to_date: String,
    pub with_deleted: bool,
}

impl From<InputData> for SoapResponse {
    fn from(input: InputData) -> Self {
        Self {
            bik: input.bik,
            from_date: input.from_date,
            to_date: input.to_date,
            with_deleted: input.with_deleted,
        }
    }
}

impl SoapResponse {
    /// Renders the document with two-space indentation and no XML declaration.
    pub fn to_xml(&self) -> anyhow::Result<String> {
        let mut buffer = String::new();
        let mut serializer = Serializer::new(&mut buffer);
        serializer.indent(' ', INDENT_WIDTH);

        self.serialize(serializer)
            .map_err(|e| anyhow::anyhow!("Failed to encode soapResponse: {}", e))?;

        Ok(buffer)
    }
}
