use crate::client::ApiClient;
use crate::models::Testimonial;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub testimonials: Arc<Vec<Testimonial>>,
}

impl AppState {
    pub fn new(client: ApiClient, testimonials: Vec<Testimonial>) -> Self {
        Self {
            client,
            testimonials: Arc::new(testimonials),
        }
    }
}
