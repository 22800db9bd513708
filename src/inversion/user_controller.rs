pub trait UserService {
    fn get_user_by_id(&self, id: u64) -> String;
}

/// Stands in for a database lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDirectory;

impl UserService for UserDirectory {
    fn get_user_by_id(&self, id: u64) -> String {
        format!("User with ID {id}")
    }
}

pub struct UserController {
    service: Box<dyn UserService>,
}

impl UserController {
    pub fn new(service: Box<dyn UserService>) -> Self {
        Self { service }
    }

    pub fn get_user(&self, id: u64) -> String {
        self.service.get_user_by_id(id)
    }
}
