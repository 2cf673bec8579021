use fibre_autowire::{
  Arguments, ClassRegistry, Container, ContainerConfig, Injectable, ParamDescriptor, Result,
};
use std::sync::Arc;

struct AppConfig {
  database_url: String,
}

impl Injectable for AppConfig {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::builtin::<String>("database_url")
      .with_default(|| "postgres://localhost:5432/app".to_string())]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(AppConfig {
      database_url: args.value("database_url")?,
    })
  }
}

struct DatabaseConnection {
  url: String,
}

impl Injectable for DatabaseConnection {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<AppConfig>("config")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    let config: Arc<AppConfig> = args.get("config")?;
    Ok(DatabaseConnection {
      url: config.database_url.clone(),
    })
  }
}

struct UserService {
  db: Arc<DatabaseConnection>,
}

impl Injectable for UserService {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<DatabaseConnection>("db")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(UserService { db: args.get("db")? })
  }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
  let config = ContainerConfig::from_yaml_str("binding_policy: reject")?;

  let mut classes = ClassRegistry::new();
  classes
    .register::<AppConfig>()
    .register::<DatabaseConnection>()
    .register::<UserService>();

  let container = Container::with_config(config).with_introspector(classes);

  // Nothing is bound; the whole graph is autowired from the registry.
  let users = container.resolve::<UserService>()?;
  println!("user service talks to {}", users.db.url);

  let db = container.resolve::<DatabaseConnection>()?;
  assert!(Arc::ptr_eq(&users.db, &db));
  Ok(())
}
