//! Database service providers.

mod mongodb;
mod neon;
mod planetscale;
mod redis;
mod supabase;
mod turso;

pub use mongodb::MongoDbProvider;
pub use neon::NeonProvider;
pub use planetscale::PlanetScaleProvider;
pub use redis::RedisProvider;
pub use supabase::SupabaseProvider;
pub use turso::TursoProvider;
