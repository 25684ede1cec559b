pub mod account;
pub mod cart;
pub mod order;
pub mod product;

pub use account::PostgresAccountRepository;
pub use cart::PostgresCartRepository;
pub use order::PostgresOrderRepository;
pub use product::PostgresProductRepository;
