use service_core::config::ServerConfig;
use wsdl_service::config::WsdlConfig;
use wsdl_service::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = WsdlConfig {
            service_name: "wsdl-service-test".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                ..ServerConfig::default()
            },
            ..WsdlConfig::default()
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            client: reqwest::Client::new(),
        }
    }

    pub fn wsdl_url(&self) -> String {
        format!("{}/api/wsdl", self.address)
    }

    pub async fn post_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.wsdl_url())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.wsdl_url())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
