use crate::error::Result;
use crate::repository::Repository;
use crate::store::Lookup;
use std::sync::Arc;
use tracing::instrument;

pub mod customer {
    use super::*;
    use crate::model::Customer;

    pub struct CustomerService {
        repo: Arc<dyn Repository<Customer>>,
    }

    impl CustomerService {
        pub fn new(repo: Arc<dyn Repository<Customer>>) -> Self {
            Self { repo }
        }

        /// Fetches a customer by id, passing the repository outcome through.
        #[instrument(skip(self))]
        pub fn get_customer(&self, id: &str) -> Result<Lookup<Customer>> {
            self.repo.get_by_id(id)
        }
    }
}

pub mod product {
    use super::*;
    use crate::model::Product;

    pub struct ProductService {
        repo: Arc<dyn Repository<Product>>,
    }

    impl ProductService {
        pub fn new(repo: Arc<dyn Repository<Product>>) -> Self {
            Self { repo }
        }

        #[instrument(skip(self))]
        pub fn get_product(&self, id: &str) -> Result<Lookup<Product>> {
            self.repo.get_by_id(id)
        }
    }
}
