//! Service template catalog.
//!
//! A fixed, read-only table of service blueprints (image plus default
//! ports, environment, and volumes) offered as starting points for a
//! compose selection. The catalog has no lifecycle beyond process start,
//! so it is plain `'static` data.

use serde::Serialize;

/// A predefined service blueprint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceTemplate {
    /// Catalog key used to select the template (e.g. `"postgres"`).
    pub key: &'static str,
    /// Default display name for a service cloned from this template.
    pub default_name: &'static str,
    /// Container image reference.
    pub image: &'static str,
    /// `host:container` port mappings.
    pub ports: &'static [&'static str],
    /// Environment variables in the order they render.
    pub environment: &'static [(&'static str, &'static str)],
    /// `source:target[:mode]` volume specs.
    pub volumes: &'static [&'static str],
}

/// All catalog entries, in presentation order.
pub const TEMPLATES: &[ServiceTemplate] = &[
    ServiceTemplate {
        key: "postgres",
        default_name: "postgres",
        image: "postgres:15-alpine",
        ports: &["5432:5432"],
        environment: &[
            ("POSTGRES_USER", "user"),
            ("POSTGRES_PASSWORD", "password"),
            ("POSTGRES_DB", "myapp"),
        ],
        volumes: &["postgres_data:/var/lib/postgresql/data"],
    },
    ServiceTemplate {
        key: "mysql",
        default_name: "mysql",
        image: "mysql:8.0",
        ports: &["3306:3306"],
        environment: &[
            ("MYSQL_ROOT_PASSWORD", "rootpassword"),
            ("MYSQL_DATABASE", "myapp"),
            ("MYSQL_USER", "user"),
            ("MYSQL_PASSWORD", "password"),
        ],
        volumes: &["mysql_data:/var/lib/mysql"],
    },
    ServiceTemplate {
        key: "redis",
        default_name: "redis",
        image: "redis:7-alpine",
        ports: &["6379:6379"],
        environment: &[],
        volumes: &["redis_data:/data"],
    },
    ServiceTemplate {
        key: "mongodb",
        default_name: "mongodb",
        image: "mongo:6",
        ports: &["27017:27017"],
        environment: &[
            ("MONGO_INITDB_ROOT_USERNAME", "admin"),
            ("MONGO_INITDB_ROOT_PASSWORD", "password"),
        ],
        volumes: &["mongo_data:/data/db"],
    },
    ServiceTemplate {
        key: "nginx",
        default_name: "nginx",
        image: "nginx:alpine",
        ports: &["80:80", "443:443"],
        environment: &[],
        volumes: &["./nginx.conf:/etc/nginx/nginx.conf:ro"],
    },
    ServiceTemplate {
        key: "nodejs",
        default_name: "app",
        image: "node:18-alpine",
        ports: &["3000:3000"],
        environment: &[("NODE_ENV", "development"), ("PORT", "3000")],
        volumes: &[".:/app", "/app/node_modules"],
    },
    ServiceTemplate {
        key: "python",
        default_name: "api",
        image: "python:3.11-slim",
        ports: &["8000:8000"],
        environment: &[("PYTHONUNBUFFERED", "1")],
        volumes: &[".:/app"],
    },
    ServiceTemplate {
        key: "elasticsearch",
        default_name: "elasticsearch",
        image: "elasticsearch:8.8.0",
        ports: &["9200:9200"],
        environment: &[
            ("discovery.type", "single-node"),
            ("xpack.security.enabled", "false"),
        ],
        volumes: &["es_data:/usr/share/elasticsearch/data"],
    },
    ServiceTemplate {
        key: "kafka",
        default_name: "kafka",
        image: "confluentinc/cp-kafka:latest",
        ports: &["9092:9092"],
        environment: &[
            ("KAFKA_ZOOKEEPER_CONNECT", "zookeeper:2181"),
            ("KAFKA_ADVERTISED_LISTENERS", "PLAINTEXT://localhost:9092"),
        ],
        volumes: &[],
    },
    ServiceTemplate {
        key: "rabbitmq",
        default_name: "rabbitmq",
        image: "rabbitmq:3-management",
        ports: &["5672:5672", "15672:15672"],
        environment: &[
            ("RABBITMQ_DEFAULT_USER", "admin"),
            ("RABBITMQ_DEFAULT_PASS", "password"),
        ],
        volumes: &[],
    },
];

/// Look up a template by catalog key.
pub fn find(key: &str) -> Option<&'static ServiceTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_key() {
        let t = find("postgres").unwrap();
        assert_eq!(t.image, "postgres:15-alpine");
        assert_eq!(t.default_name, "postgres");
    }

    #[test]
    fn lookup_unknown_key() {
        assert!(find("cassandra").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn every_template_has_an_image() {
        for t in TEMPLATES {
            assert!(!t.image.is_empty(), "template {} missing image", t.key);
        }
    }

    #[test]
    fn port_specs_are_host_container_pairs() {
        for t in TEMPLATES {
            for port in t.ports {
                assert!(port.contains(':'), "template {} port {port}", t.key);
            }
        }
    }
}
