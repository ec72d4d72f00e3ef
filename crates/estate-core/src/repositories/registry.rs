//! One repository handle per entity, handed to the services at start-up.

use std::sync::Arc;

use crate::domain::{
    Apartment, Building, Complaint, Contract, Meeting, Notification, Owner, Payment, Staff, Survey,
    Tenant, User,
};

use super::memory::MemoryRepository;
use super::repository::SharedRepository;

#[derive(Clone)]
pub struct RepositorySet {
    pub users: SharedRepository<User>,
    pub buildings: SharedRepository<Building>,
    pub apartments: SharedRepository<Apartment>,
    pub owners: SharedRepository<Owner>,
    pub tenants: SharedRepository<Tenant>,
    pub contracts: SharedRepository<Contract>,
    pub payments: SharedRepository<Payment>,
    pub complaints: SharedRepository<Complaint>,
    pub surveys: SharedRepository<Survey>,
    pub meetings: SharedRepository<Meeting>,
    pub notifications: SharedRepository<Notification>,
    pub staff: SharedRepository<Staff>,
}

impl RepositorySet {
    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::new()),
            buildings: Arc::new(MemoryRepository::new()),
            apartments: Arc::new(MemoryRepository::new()),
            owners: Arc::new(MemoryRepository::new()),
            tenants: Arc::new(MemoryRepository::new()),
            contracts: Arc::new(MemoryRepository::new()),
            payments: Arc::new(MemoryRepository::new()),
            complaints: Arc::new(MemoryRepository::new()),
            surveys: Arc::new(MemoryRepository::new()),
            meetings: Arc::new(MemoryRepository::new()),
            notifications: Arc::new(MemoryRepository::new()),
            staff: Arc::new(MemoryRepository::new()),
        }
    }
}
