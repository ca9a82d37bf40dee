//! Compose selection state and document renderer.
//!
//! A [`ComposeSelection`] is an ordered collection of services cloned from
//! the [`crate::catalog`] templates. Every mutation leaves the selection in
//! a renderable state; [`ComposeSelection::render`] is a pure function of
//! the current state, so rendering twice without an intervening mutation
//! yields byte-identical text.
//!
//! This is an authoring aid, not a validator: ports, images, and volume
//! specs are passed through verbatim, and every operation either succeeds
//! or is a no-op.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Version header emitted at the top of every document.
pub const COMPOSE_VERSION: &str = "3.8";

/// The shared network every selected service joins.
pub const SHARED_NETWORK: &str = "app-network";

/// Driver for the shared network.
pub const NETWORK_DRIVER: &str = "bridge";

/// Rendered instead of a structural document when the selection is empty.
pub const EMPTY_PLACEHOLDER: &str = "# Add services to generate docker-compose.yml";

/// Session-unique identifier for a selected service.
pub type ServiceId = u64;

/// A service instance in the current selection.
///
/// Cloned from a catalog template on add; `name`, `ports`, `environment`,
/// and `volumes` are user-editable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedService {
    pub id: ServiceId,
    pub name: String,
    pub image: String,
    pub ports: Vec<String>,
    /// Insertion order is preserved in the rendered block.
    pub environment: IndexMap<String, String>,
    pub volumes: Vec<String>,
    pub depends_on: Vec<String>,
    pub networks: Vec<String>,
}

/// Partial edit applied to a selected service. `None` fields are left as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub ports: Option<Vec<String>>,
    pub environment: Option<IndexMap<String, String>>,
    pub volumes: Option<Vec<String>>,
}

/// Ordered service selection plus the project name shown in the authoring UI.
///
/// Rendered blocks are keyed by the stable service id internally, and
/// display names are kept unique at edit time, so two services can never
/// silently collapse into one output block.
#[derive(Debug)]
pub struct ComposeSelection {
    project_name: String,
    services: Vec<SelectedService>,
    next_id: ServiceId,
}

impl Default for ComposeSelection {
    fn default() -> Self {
        Self::new("my-app")
    }
}

impl ComposeSelection {
    pub fn new(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            services: Vec::new(),
            next_id: 1,
        }
    }

    /// The services in insertion order.
    pub fn services(&self) -> &[SelectedService] {
        &self.services
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: &str) {
        self.project_name = name.to_string();
    }

    /// Append a service cloned from the catalog template with `template_key`.
    ///
    /// Returns the fresh service id, or `None` (no-op) for an unknown key.
    /// If the template's default name is already in use, the first free
    /// `name-2`, `name-3`, ... suffix is chosen.
    pub fn add_service(&mut self, template_key: &str) -> Option<ServiceId> {
        let template = catalog::find(template_key)?;

        let id = self.next_id;
        self.next_id += 1;

        let name = self.unique_name(template.default_name);
        self.services.push(SelectedService {
            id,
            name,
            image: template.image.to_string(),
            ports: template.ports.iter().map(|p| p.to_string()).collect(),
            environment: template
                .environment
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            volumes: template.volumes.iter().map(|v| v.to_string()).collect(),
            depends_on: Vec::new(),
            networks: vec![SHARED_NETWORK.to_string()],
        });

        Some(id)
    }

    /// Remove the service with `id`. Absent ids are a no-op (idempotent).
    pub fn remove_service(&mut self, id: ServiceId) {
        self.services.retain(|s| s.id != id);
    }

    /// Merge the provided fields into the service with `id`.
    ///
    /// Unknown ids are a no-op. A rename that would collide with another
    /// service's display name is rejected as a field-level no-op; the
    /// remaining fields of the update still apply.
    pub fn update_service(&mut self, id: ServiceId, update: ServiceUpdate) {
        let Some(idx) = self.services.iter().position(|s| s.id == id) else {
            return;
        };

        if let Some(name) = update.name {
            let taken = self.services.iter().any(|s| s.id != id && s.name == name);
            if taken {
                tracing::warn!(%name, "Rename rejected: display name already in use");
            } else {
                self.services[idx].name = name;
            }
        }

        let service = &mut self.services[idx];
        if let Some(ports) = update.ports {
            service.ports = ports;
        }
        if let Some(environment) = update.environment {
            service.environment = environment;
        }
        if let Some(volumes) = update.volumes {
            service.volumes = volumes;
        }
    }

    /// Render the current selection to compose document text.
    pub fn render(&self) -> String {
        render_document(&self.project_name, &self.services)
    }

    /// First display name in `base`, `base-2`, `base-3`, ... not yet in use.
    fn unique_name(&self, base: &str) -> String {
        let taken = |candidate: &str| self.services.iter().any(|s| s.name == candidate);

        if !taken(base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Render a compose document from an ordered service collection.
///
/// The project name is part of the authoring state but never appears in
/// the document itself: compose tooling takes the project name from the
/// working directory or the `-p` flag, not from the file.
///
/// Block layout per service, in order: `image`, `ports`, `environment`,
/// `volumes`, `depends_on`, `networks`, with empty collections omitted.
/// Named volumes derived from the service volume specs are declared
/// top-level, followed by the single shared bridge network.
pub fn render_document(_project_name: &str, services: &[SelectedService]) -> String {
    if services.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut out = format!("version: '{COMPOSE_VERSION}'\n\n");
    out.push_str("services:\n");

    for service in services {
        out.push_str(&format!("  {}:\n", service.name));
        out.push_str(&format!("    image: {}\n", service.image));

        if !service.ports.is_empty() {
            out.push_str("    ports:\n");
            for port in &service.ports {
                out.push_str(&format!("      - \"{port}\"\n"));
            }
        }

        if !service.environment.is_empty() {
            out.push_str("    environment:\n");
            for (key, value) in &service.environment {
                out.push_str(&format!("      {key}: {value}\n"));
            }
        }

        if !service.volumes.is_empty() {
            out.push_str("    volumes:\n");
            for volume in &service.volumes {
                out.push_str(&format!("      - {volume}\n"));
            }
        }

        if !service.depends_on.is_empty() {
            out.push_str("    depends_on:\n");
            for dep in &service.depends_on {
                out.push_str(&format!("      - {dep}\n"));
            }
        }

        if !service.networks.is_empty() {
            out.push_str("    networks:\n");
            for network in &service.networks {
                out.push_str(&format!("      - {network}\n"));
            }
        }

        out.push('\n');
    }

    let named = named_volumes(services);
    if !named.is_empty() {
        out.push_str("volumes:\n");
        for name in named {
            out.push_str(&format!("  {name}:\n"));
        }
        out.push('\n');
    }

    out.push_str("networks:\n");
    out.push_str(&format!("  {SHARED_NETWORK}:\n"));
    out.push_str(&format!("    driver: {NETWORK_DRIVER}\n"));

    out
}

/// Named volumes requiring a top-level declaration, in first-seen order.
///
/// A volume spec's source is everything before the first `:`; sources
/// starting with `.` or `/` are host paths and are excluded.
fn named_volumes(services: &[SelectedService]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for service in services {
        for spec in &service.volumes {
            let source = spec.split(':').next().unwrap_or(spec);
            if source.starts_with('.') || source.starts_with('/') {
                continue;
            }
            if !names.contains(&source) {
                names.push(source);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_with(keys: &[&str]) -> ComposeSelection {
        let mut selection = ComposeSelection::default();
        for key in keys {
            selection.add_service(key);
        }
        selection
    }

    #[test]
    fn empty_selection_renders_placeholder() {
        let selection = ComposeSelection::default();
        assert_eq!(selection.render(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn removing_all_services_returns_to_placeholder() {
        let mut selection = ComposeSelection::default();
        let id = selection.add_service("redis").unwrap();
        selection.remove_service(id);
        assert_eq!(selection.render(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn single_service_document() {
        let selection = selection_with(&["postgres"]);
        let expected = "\
version: '3.8'

services:
  postgres:
    image: postgres:15-alpine
    ports:
      - \"5432:5432\"
    environment:
      POSTGRES_USER: user
      POSTGRES_PASSWORD: password
      POSTGRES_DB: myapp
    volumes:
      - postgres_data:/var/lib/postgresql/data
    networks:
      - app-network

volumes:
  postgres_data:

networks:
  app-network:
    driver: bridge
";
        assert_eq!(selection.render(), expected);
    }

    #[test]
    fn render_is_idempotent() {
        let selection = selection_with(&["postgres", "nginx"]);
        assert_eq!(selection.render(), selection.render());
    }

    #[test]
    fn service_blocks_follow_insertion_order() {
        let mut selection = selection_with(&["postgres", "redis"]);

        // Edits must not affect block order.
        let first_id = selection.services()[0].id;
        selection.update_service(
            first_id,
            ServiceUpdate {
                ports: Some(vec!["15432:5432".to_string()]),
                ..Default::default()
            },
        );

        let doc = selection.render();
        let postgres_at = doc.find("  postgres:").unwrap();
        let redis_at = doc.find("  redis:").unwrap();
        assert!(postgres_at < redis_at);
    }

    #[test]
    fn named_volumes_are_declared_top_level() {
        let selection = selection_with(&["postgres", "redis"]);
        let doc = selection.render();

        assert!(doc.contains("volumes:\n  postgres_data:\n  redis_data:\n"));
    }

    #[test]
    fn path_volume_sources_are_not_declared() {
        // nginx mounts ./nginx.conf; nodejs mounts . and /app/node_modules.
        let selection = selection_with(&["nginx", "nodejs"]);
        let doc = selection.render();

        assert!(!doc.contains("\nvolumes:"));
        // The service-level mounts still render verbatim.
        assert!(doc.contains("      - ./nginx.conf:/etc/nginx/nginx.conf:ro\n"));
        assert!(doc.contains("      - /app/node_modules\n"));
    }

    #[test]
    fn shared_network_always_emitted_once() {
        let selection = selection_with(&["kafka"]);
        let doc = selection.render();

        assert!(doc.ends_with("networks:\n  app-network:\n    driver: bridge\n"));
        assert_eq!(doc.matches("    driver: bridge").count(), 1);
    }

    #[test]
    fn end_to_end_postgres_then_redis() {
        let selection = selection_with(&["postgres", "redis"]);
        let doc = selection.render();

        let postgres_at = doc.find("  postgres:").unwrap();
        let redis_at = doc.find("  redis:").unwrap();
        assert!(postgres_at < redis_at);
        assert!(doc.contains("  postgres_data:"));
        assert!(doc.contains("  redis_data:"));
        assert_eq!(doc.matches("app-network:").count(), 1);
    }

    #[test]
    fn unknown_template_is_a_noop() {
        let mut selection = ComposeSelection::default();
        assert_eq!(selection.add_service("cassandra"), None);
        assert!(selection.services().is_empty());
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut selection = selection_with(&["redis"]);
        selection.remove_service(999);
        assert_eq!(selection.services().len(), 1);
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut selection = selection_with(&["redis"]);
        selection.update_service(
            999,
            ServiceUpdate {
                name: Some("cache".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(selection.services()[0].name, "redis");
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut selection = selection_with(&["postgres"]);
        let id = selection.services()[0].id;

        selection.update_service(
            id,
            ServiceUpdate {
                ports: Some(vec!["15432:5432".to_string()]),
                ..Default::default()
            },
        );

        let service = &selection.services()[0];
        assert_eq!(service.ports, vec!["15432:5432".to_string()]);
        assert_eq!(service.name, "postgres");
        assert_eq!(service.image, "postgres:15-alpine");
        assert_eq!(service.environment.len(), 3);
    }

    #[test]
    fn duplicate_add_uniquifies_default_name() {
        let selection = selection_with(&["postgres", "postgres", "postgres"]);
        let names: Vec<&str> = selection.services().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["postgres", "postgres-2", "postgres-3"]);
    }

    #[test]
    fn colliding_rename_is_rejected_but_other_fields_apply() {
        let mut selection = selection_with(&["postgres", "redis"]);
        let redis_id = selection.services()[1].id;

        selection.update_service(
            redis_id,
            ServiceUpdate {
                name: Some("postgres".to_string()),
                ports: Some(vec!["16379:6379".to_string()]),
                ..Default::default()
            },
        );

        let redis = &selection.services()[1];
        assert_eq!(redis.name, "redis");
        assert_eq!(redis.ports, vec!["16379:6379".to_string()]);
    }

    #[test]
    fn rename_to_own_name_is_allowed() {
        let mut selection = selection_with(&["redis"]);
        let id = selection.services()[0].id;
        selection.update_service(
            id,
            ServiceUpdate {
                name: Some("redis".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(selection.services()[0].name, "redis");
    }

    #[test]
    fn depends_on_renders_when_present() {
        let mut selection = selection_with(&["nodejs"]);
        // depends_on is not user-editable via ServiceUpdate; set directly to
        // exercise the renderer.
        selection.services[0].depends_on = vec!["postgres".to_string()];

        let doc = selection.render();
        assert!(doc.contains("    depends_on:\n      - postgres\n"));
    }

    #[test]
    fn environment_preserves_insertion_order() {
        let selection = selection_with(&["mysql"]);
        let doc = selection.render();

        let root = doc.find("MYSQL_ROOT_PASSWORD").unwrap();
        let database = doc.find("MYSQL_DATABASE").unwrap();
        let user = doc.find("MYSQL_USER:").unwrap();
        let password = doc.find("MYSQL_PASSWORD").unwrap();
        assert!(root < database && database < user && user < password);
    }

    #[test]
    fn malformed_port_edit_passes_through_verbatim() {
        let mut selection = selection_with(&["redis"]);
        let id = selection.services()[0].id;
        selection.update_service(
            id,
            ServiceUpdate {
                ports: Some(vec!["not-a-port".to_string()]),
                ..Default::default()
            },
        );

        assert!(selection.render().contains("      - \"not-a-port\"\n"));
    }
}
