/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    name: &'static str,
    document: &'static str,
}

impl Operation {
    pub const fn new(name: &'static str, document: &'static str) -> Self {
        Self { name, document }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn document(&self) -> &'static str {
        self.document
    }
}

pub const GET_CLIENTS: Operation = Operation::new(
    "GetClients",
    "query GetClients { clients { id name email phone } }",
);

pub const GET_CLIENT: Operation = Operation::new(
    "GetClient",
    "query GetClient($id: ID!) { client(id: $id) { id name email phone } }",
);

pub const GET_PROJECTS: Operation = Operation::new(
    "GetProjects",
    "query GetProjects { projects { id name description status client { id name email phone } } }",
);

pub const GET_PROJECT: Operation = Operation::new(
    "GetProject",
    "query GetProject($id: ID!) { project(id: $id) { id name description status client { id name email phone } } }",
);

pub const ADD_CLIENT: Operation = Operation::new(
    "AddClient",
    "mutation AddClient($name: String!, $email: String!, $phone: String!) { addClient(name: $name, email: $email, phone: $phone) { id name email phone } }",
);

pub const DELETE_CLIENT: Operation = Operation::new(
    "DeleteClient",
    "mutation DeleteClient($id: ID!) { deleteClient(id: $id) { id name email phone } }",
);

pub const ADD_PROJECT: Operation = Operation::new(
    "AddProject",
    "mutation AddProject($name: String!, $description: String!, $status: ProjectStatus! = NOT_STARTED, $clientId: ID!) { addProject(name: $name, description: $description, status: $status, clientId: $clientId) { id name description status client { id name email phone } } }",
);

pub const DELETE_PROJECT: Operation = Operation::new(
    "DeleteProject",
    "mutation DeleteProject($id: ID!) { deleteProject(id: $id) { id name description status } }",
);

pub const UPDATE_PROJECT: Operation = Operation::new(
    "UpdateProject",
    "mutation UpdateProject($id: ID!, $name: String, $description: String, $status: ProjectStatus) { updateProject(id: $id, name: $name, description: $description, status: $status) { id name description status client { id name email phone } } }",
);
