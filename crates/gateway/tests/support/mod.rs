//! In-memory repositories and helpers for router tests.
//!
//! The real managers run on top of these, so requests go through the same
//! validation and wiring as in production without PostgreSQL or Redis.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use auth_service::{Authenticator, Claims};
use common::{
    AppError, AppResult, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
use domain::{
    Customer, CustomerChanges, CustomerRole, NewCustomer, NewOrder, NewPayment, NewProduct,
    NewReview, Order, OrderFilter, Payment, PaymentChanges, PaymentFilter, Product,
    ProductChanges, ProductFilter, Review, ReviewStatus, SavedAddress, WishlistEntry,
    PAYMENT_STATUS_PENDING,
};
use gateway_lib::{config::GatewayConfig, directory::StoreDirectory, routes::create_router, state::AppState};
use rust_decimal::Decimal;
use store_service::{
    repository::{
        CustomerRepository, OrderRepository, PaymentRepository, ProductRepository,
        ReviewRepository, WishlistRepository,
    },
    service::{
        CustomerManager, DashboardManager, OrderManager, PaymentManager, ProductManager,
        ReviewManager, WishlistManager,
    },
    StoreServices,
};

pub const JWT_SECRET: &str = "router-test-secret-that-is-long-enough";

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryCustomers {
    rows: Mutex<Vec<Customer>>,
}

impl InMemoryCustomers {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn set_role(&self, id: Uuid, role: CustomerRole) {
        if let Some(customer) = self.rows.lock().unwrap().iter_mut().find(|c| c.id == id) {
            customer.role = role;
        }
    }

    pub fn role_of(&self, id: Uuid) -> Option<CustomerRole> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.role)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.is_active())
            .cloned())
    }

    async fn find_by_id_with_deactivated(&self, id: Uuid) -> AppResult<Option<Customer>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email && c.is_active())
            .cloned())
    }

    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn create(&self, new: NewCustomer) -> AppResult<Customer> {
        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            password_hash: new.password.into_string(),
            role: CustomerRole::Customer,
            addresses: Vec::new(),
            created_at: now,
            updated_at: now,
            deactivated_at: None,
        };
        self.rows.lock().unwrap().push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, id: Uuid, changes: CustomerChanges) -> AppResult<Customer> {
        let mut rows = self.rows.lock().unwrap();
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id && c.is_active())
            .ok_or(AppError::NotFound("Customer"))?;

        if let Some(first_name) = changes.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            customer.last_name = last_name;
        }
        if let Some(phone) = changes.phone {
            customer.phone = phone;
        }
        if let Some(email) = changes.email {
            customer.email = email;
        }
        if let Some(role) = changes.role {
            customer.role = role;
        }
        customer.updated_at = Utc::now();
        Ok(customer.clone())
    }

    async fn set_addresses(&self, id: Uuid, addresses: Vec<SavedAddress>) -> AppResult<Customer> {
        let mut rows = self.rows.lock().unwrap();
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id && c.is_active())
            .ok_or(AppError::NotFound("Customer"))?;
        customer.addresses = addresses;
        Ok(customer.clone())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id && c.is_active())
            .ok_or(AppError::NotFound("Customer"))?;
        customer.deactivated_at = Some(Utc::now());
        Ok(())
    }

    async fn restore(&self, id: Uuid) -> AppResult<Customer> {
        let mut rows = self.rows.lock().unwrap();
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound("Customer"))?;
        customer.deactivated_at = None;
        Ok(customer.clone())
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        let mut active: Vec<Customer> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect();
        active.reverse();
        Ok(active)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.list().await?.len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    pub fn seed(&self, name: &str, price: Decimal) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "produce".to_string(),
            stock: 10,
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(product.clone());
        product
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_many(&self, ids: Vec<Uuid>) -> AppResult<Vec<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        filter: ProductFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Product>, u64)> {
        let mut matching: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.category.as_ref().map_or(true, |c| &p.category == c))
            .filter(|p| {
                filter.search.as_ref().map_or(true, |s| {
                    p.name.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn create(&self, new: NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            stock: new.stock,
            image: new.image,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Product"))?;
        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Product"));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    rows: Mutex<Vec<Order>>,
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.reverse();
    orders
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn create(&self, new: NewOrder, status: String) -> AppResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id: new.owner.id(),
            demo_ref: new.owner.demo_reference().map(str::to_string),
            items: new.items,
            address: new.address,
            total: new.total,
            payment_method: new.payment_method,
            payment_id: new.payment_id,
            status,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        Ok(self.rows.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Order>> {
        let rows = self.rows.lock().unwrap();
        Ok(newest_first(
            rows.iter().filter(|o| o.user_id == user_id).cloned().collect(),
        ))
    }

    async fn search(
        &self,
        filter: OrderFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Order>, u64)> {
        let matching: Vec<Order> = newest_first(
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|o| filter.status.as_ref().map_or(true, |s| &o.status == s))
                .filter(|o| {
                    filter
                        .payment_method
                        .as_ref()
                        .map_or(true, |m| &o.payment_method == m)
                })
                .filter(|o| filter.user_id.map_or(true, |id| o.user_id == id))
                .filter(|o| filter.min_total.map_or(true, |min| o.total >= min))
                .filter(|o| filter.max_total.map_or(true, |max| o.total <= max))
                .cloned()
                .collect(),
        );
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn all(&self) -> AppResult<Vec<Order>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<Order>> {
        Ok(newest_first(self.all().await?)
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn update_status(&self, id: Uuid, status: String) -> AppResult<Order> {
        let mut rows = self.rows.lock().unwrap();
        let order = rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(AppError::NotFound("Order"))?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryPayments {
    rows: Mutex<Vec<Payment>>,
}

#[async_trait]
impl PaymentRepository for InMemoryPayments {
    async fn create(&self, new: NewPayment) -> AppResult<Payment> {
        let payment = Payment {
            id: Uuid::new_v4(),
            amount: new.amount,
            method: new.method,
            status: new
                .status
                .unwrap_or_else(|| PAYMENT_STATUS_PENDING.to_string()),
            date: Utc::now(),
            booking_id: new.booking_id,
        };
        self.rows.lock().unwrap().push(payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn search(
        &self,
        filter: PaymentFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Payment>, u64)> {
        let mut matching: Vec<Payment> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.status.as_ref().map_or(true, |s| &p.status == s))
            .filter(|p| filter.method.as_ref().map_or(true, |m| &p.method == m))
            .cloned()
            .collect();
        matching.reverse();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn all(&self) -> AppResult<Vec<Payment>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, changes: PaymentChanges) -> AppResult<Payment> {
        let mut rows = self.rows.lock().unwrap();
        let payment = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Payment"))?;
        if let Some(amount) = changes.amount {
            payment.amount = amount;
        }
        if let Some(method) = changes.method {
            payment.method = method;
        }
        if let Some(status) = changes.status {
            payment.status = status;
        }
        if let Some(booking_id) = changes.booking_id {
            payment.booking_id = booking_id;
        }
        Ok(payment.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Payment"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryWishlists {
    rows: Mutex<Vec<WishlistEntry>>,
}

#[async_trait]
impl WishlistRepository for InMemoryWishlists {
    async fn product_ids(&self, customer_id: Uuid) -> AppResult<Vec<Uuid>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.customer_id == customer_id)
            .map(|e| e.product_id)
            .collect())
    }

    async fn add(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.customer_id == customer_id && e.product_id == product_id)
        {
            return Ok(false);
        }
        rows.push(WishlistEntry {
            customer_id,
            product_id,
            added_at: Utc::now(),
        });
        Ok(true)
    }

    async fn remove(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| !(e.customer_id == customer_id && e.product_id == product_id));
        Ok(rows.len() != before)
    }

    async fn all(&self) -> AppResult<Vec<WishlistEntry>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryReviews {
    rows: Mutex<Vec<Review>>,
}

impl InMemoryReviews {
    fn newest_first(&self, keep: impl Fn(&Review) -> bool) -> Vec<Review> {
        let mut matching: Vec<Review> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect();
        matching.reverse();
        matching
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn create(&self, new: NewReview) -> AppResult<Review> {
        let review = Review {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            product_id: new.product_id,
            rating: new.rating,
            comment: new.comment,
            status: ReviewStatus::Pending,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(review.clone());
        Ok(review)
    }

    async fn list_by_product(
        &self,
        product_id: Uuid,
        status: Option<ReviewStatus>,
    ) -> AppResult<Vec<Review>> {
        Ok(self.newest_first(|r| {
            r.product_id == product_id && status.map_or(true, |s| r.status == s)
        }))
    }

    async fn list(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Review>> {
        Ok(self.newest_first(|r| status.map_or(true, |s| r.status == s)))
    }

    async fn update_status(&self, id: Uuid, status: ReviewStatus) -> AppResult<Review> {
        let mut rows = self.rows.lock().unwrap();
        let review = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound("Review"))?;
        review.status = status;
        Ok(review.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Review"));
        }
        Ok(())
    }
}

// =============================================================================
// Application under test
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub customers: Arc<InMemoryCustomers>,
    pub products: Arc<InMemoryProducts>,
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        cache: None,
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            expiration_hours: 1,
        },
        rate_limit: RateLimitConfig::default(),
        auth_rate_limit: RateLimitConfig::default(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        let customers = Arc::new(InMemoryCustomers::default());
        let products = Arc::new(InMemoryProducts::default());
        let orders = Arc::new(InMemoryOrders::default());
        let payments = Arc::new(InMemoryPayments::default());
        let wishlists = Arc::new(InMemoryWishlists::default());
        let reviews = Arc::new(InMemoryReviews::default());

        let store = StoreServices {
            customers: Arc::new(CustomerManager::new(customers.clone())),
            products: Arc::new(ProductManager::new(products.clone())),
            orders: Arc::new(OrderManager::new(orders.clone())),
            payments: Arc::new(PaymentManager::new(payments)),
            wishlists: Arc::new(WishlistManager::new(wishlists, products.clone())),
            reviews: Arc::new(ReviewManager::new(reviews, products.clone())),
            dashboard: Arc::new(DashboardManager::new(
                customers.clone(),
                products.clone(),
                orders,
            )),
        };

        let config = test_config();
        let directory = Arc::new(StoreDirectory::new(store.customers.clone()));
        let auth = Arc::new(Authenticator::new(directory, config.jwt.clone()));
        let state = AppState::new(store, auth, None, config);

        Self {
            router: create_router(state),
            customers,
            products,
        }
    }

    /// Send a request and decode the JSON body (Null when empty).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    /// Register a customer and hand back an admin token bound to their id.
    pub async fn register_admin(&self, email: &str) -> (Uuid, String) {
        let id = self.register(email).await;
        self.customers.set_role(id, CustomerRole::Admin);
        (id, token_for(id, "admin"))
    }

    /// Register through the API and return the new customer's id.
    pub async fn register(&self, email: &str) -> Uuid {
        let (status, body) = self
            .send(
                "POST",
                "/api/v1/auth/register",
                None,
                Some(serde_json::json!({
                    "first_name": "Test",
                    "last_name": "Shopper",
                    "email": email,
                    "phone": "555-0100",
                    "password": "correct-horse"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        body["id"].as_str().unwrap().parse().unwrap()
    }
}

/// Mint a token signed with the test secret.
pub fn token_for(id: Uuid, role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: id,
        email: format!("{}@example.com", id),
        role: role.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    token_for(Uuid::new_v4(), "admin")
}

pub fn customer_token() -> String {
    token_for(Uuid::new_v4(), "customer")
}

/// Decimal from a JSON number or string.
pub fn decimal(value: &Value) -> Decimal {
    serde_json::from_value(value.clone()).unwrap()
}
