//! Static catalogue of the managed tables.
//!
//! Each [`Entity`] describes its table, surrogate key and the form fields collected
//! when a record is added or updated. The generic CRUD engine builds every
//! statement from this catalogue, so column names in SQL never come from user input.

use crate::error::ValidationError;
use crate::models::Value;
use crate::validation;
use std::fmt;

pub const SHIPMENT_STATUSES: &[&str] = &[
    "Pending",
    "In Transit",
    "Out for Delivery",
    "Delivered",
    "Returned",
    "Cancelled",
];
pub const PICKUP_STATUSES: &[&str] = &["Pending", "Scheduled", "Completed", "Cancelled"];
pub const ATTEMPT_STATUSES: &[&str] = &["Success", "Failed", "Rescheduled"];
pub const PAYMENT_METHODS: &[&str] = &[
    "Credit Card",
    "Debit Card",
    "Cash",
    "Bank Transfer",
    "PayPal",
];
pub const ADDRESS_TYPES: &[&str] = &["Residential", "Commercial"];

const MAX_PASSWORD_LEN: usize = 128;

/// How a field is prompted for and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { max_len: usize },
    Email,
    Phone,
    /// ISO `YYYY-MM-DD`.
    Date,
    Decimal,
    /// Hashed before it is stored.
    Password,
    /// Foreign key into another catalogue entity.
    Reference(Entity),
    Choice(&'static [&'static str]),
}

/// One column collected through a form.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    const fn required(column: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            label,
            kind,
            required: true,
        }
    }

    const fn optional(column: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            label,
            kind,
            required: false,
        }
    }

    /// Validates raw console input for this field.
    ///
    /// Blank input becomes `Value::Null` for optional fields. Passwords are kept exactly
    /// as typed and returned as plain text; hashing happens right before the statement
    /// is built.
    pub fn parse(&self, raw: &str) -> Result<Value, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(ValidationError::Required {
                    field: self.label.to_string(),
                })
            } else {
                Ok(Value::Null)
            };
        }

        let value = match self.kind {
            FieldKind::Text { max_len } => {
                Value::Text(validation::validate_text(self.label, trimmed, max_len)?)
            },
            FieldKind::Email => Value::Text(validation::validate_email(trimmed)?),
            FieldKind::Phone => Value::Text(validation::validate_phone(trimmed)?),
            FieldKind::Date => Value::Date(validation::parse_date(trimmed)?),
            FieldKind::Reference(_) => Value::Int(validation::parse_id(self.label, trimmed)?),
            FieldKind::Decimal => Value::Decimal(validation::parse_decimal(self.label, trimmed)?),
            FieldKind::Password => {
                Value::Text(validation::validate_password(self.label, raw, MAX_PASSWORD_LEN)?)
            },
            FieldKind::Choice(options) => {
                Value::Text(validation::validate_choice(self.label, trimmed, options)?)
            },
        };
        Ok(value)
    }
}

/// Table, key and form fields of one entity.
#[derive(Debug)]
pub struct EntitySpec {
    /// Display name, as shown in menus.
    pub name: &'static str,
    pub table: &'static str,
    pub key: &'static str,
    pub fields: &'static [Field],
}

impl EntitySpec {
    pub fn field(&self, column: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// True if `column` is the key or one of the form columns.
    pub fn has_column(&self, column: &str) -> bool {
        column == self.key || self.field(column).is_some()
    }

    /// Key first, then form columns in declaration order.
    pub fn columns(&self) -> Vec<&'static str> {
        std::iter::once(self.key)
            .chain(self.fields.iter().map(|f| f.column))
            .collect()
    }
}

/// The managed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Users,
    UserRole,
    Customers,
    Addresses,
    Shipments,
    Packages,
    PackageDimension,
    PackageStatus,
    Payments,
    PickupRequests,
    DeliveryAttempts,
}

impl Entity {
    /// Menu order.
    pub const ALL: [Entity; 11] = [
        Entity::Users,
        Entity::UserRole,
        Entity::Customers,
        Entity::Addresses,
        Entity::Shipments,
        Entity::Packages,
        Entity::PackageDimension,
        Entity::PackageStatus,
        Entity::Payments,
        Entity::PickupRequests,
        Entity::DeliveryAttempts,
    ];

    pub fn spec(self) -> &'static EntitySpec {
        match self {
            Entity::Users => &USERS,
            Entity::UserRole => &USER_ROLE,
            Entity::Customers => &CUSTOMERS,
            Entity::Addresses => &ADDRESSES,
            Entity::Shipments => &SHIPMENTS,
            Entity::Packages => &PACKAGES,
            Entity::PackageDimension => &PACKAGE_DIMENSION,
            Entity::PackageStatus => &PACKAGE_STATUS,
            Entity::Payments => &PAYMENTS,
            Entity::PickupRequests => &PICKUP_REQUESTS,
            Entity::DeliveryAttempts => &DELIVERY_ATTEMPTS,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use FieldKind::*;

static USER_ROLE: EntitySpec = EntitySpec {
    name: "User Roles",
    table: "UserRole",
    key: "role_id",
    fields: &[
        Field::required("role_name", "Role Name", Text { max_len: 50 }),
        Field::optional("description", "Description", Text { max_len: 255 }),
    ],
};

static USERS: EntitySpec = EntitySpec {
    name: "Users",
    table: "Users",
    key: "user_id",
    fields: &[
        Field::required("first_name", "First Name", Text { max_len: 50 }),
        Field::required("last_name", "Last Name", Text { max_len: 50 }),
        Field::required("email", "Email", Email),
        Field::optional("phone_number", "Phone Number", Phone),
        Field::required("role_id", "Role ID", Reference(Entity::UserRole)),
        Field::required("Password", "Password", Password),
    ],
};

static CUSTOMERS: EntitySpec = EntitySpec {
    name: "Customers",
    table: "Customers",
    key: "customer_id",
    fields: &[
        Field::required("first_name", "First Name", Text { max_len: 50 }),
        Field::required("last_name", "Last Name", Text { max_len: 50 }),
        Field::required("email", "Email", Email),
        Field::optional("phone_number", "Phone Number", Phone),
        Field::optional("created_date", "Customer Since (YYYY-MM-DD)", Date),
    ],
};

static ADDRESSES: EntitySpec = EntitySpec {
    name: "Addresses",
    table: "Addresses",
    key: "address_id",
    fields: &[
        Field::required("customer_id", "Customer ID", Reference(Entity::Customers)),
        Field::required("street", "Street", Text { max_len: 100 }),
        Field::required("city", "City", Text { max_len: 50 }),
        Field::optional("state", "State", Text { max_len: 50 }),
        Field::required("postal_code", "Postal Code", Text { max_len: 10 }),
        Field::required("country", "Country", Text { max_len: 50 }),
        Field::optional("address_type", "Address Type", Choice(ADDRESS_TYPES)),
    ],
};

static SHIPMENTS: EntitySpec = EntitySpec {
    name: "Shipments",
    table: "Shipments",
    key: "shipment_id",
    fields: &[
        Field::required("customer_id", "Customer ID", Reference(Entity::Customers)),
        Field::required(
            "origin_address_id",
            "Origin Address ID",
            Reference(Entity::Addresses),
        ),
        Field::required(
            "destination_address_id",
            "Destination Address ID",
            Reference(Entity::Addresses),
        ),
        Field::required("shipment_date", "Shipment Date (YYYY-MM-DD)", Date),
        Field::optional(
            "estimated_delivery_date",
            "Estimated Delivery (YYYY-MM-DD)",
            Date,
        ),
        Field::required("shipment_status", "Shipment Status", Choice(SHIPMENT_STATUSES)),
    ],
};

static PACKAGE_STATUS: EntitySpec = EntitySpec {
    name: "Package Statuses",
    table: "PackageStatus",
    key: "status_id",
    fields: &[
        Field::required("status_name", "Status Name", Text { max_len: 50 }),
        Field::optional("description", "Description", Text { max_len: 255 }),
    ],
};

static PACKAGES: EntitySpec = EntitySpec {
    name: "Packages",
    table: "Packages",
    key: "package_id",
    fields: &[
        Field::required("shipment_id", "Shipment ID", Reference(Entity::Shipments)),
        Field::required("weight", "Weight (kg)", Decimal),
        Field::optional("contents", "Contents", Text { max_len: 255 }),
        Field::optional("status_id", "Package Status ID", Reference(Entity::PackageStatus)),
    ],
};

static PACKAGE_DIMENSION: EntitySpec = EntitySpec {
    name: "Package Dimensions",
    table: "PackageDimension",
    key: "dimension_id",
    fields: &[
        Field::required("package_id", "Package ID", Reference(Entity::Packages)),
        Field::required("length", "Length (cm)", Decimal),
        Field::required("width", "Width (cm)", Decimal),
        Field::required("height", "Height (cm)", Decimal),
    ],
};

static PAYMENTS: EntitySpec = EntitySpec {
    name: "Payments",
    table: "Payments",
    key: "payment_id",
    fields: &[
        Field::required("customer_id", "Customer ID", Reference(Entity::Customers)),
        Field::optional("shipment_id", "Shipment ID", Reference(Entity::Shipments)),
        Field::required("amount", "Amount", Decimal),
        Field::required("payment_date", "Payment Date (YYYY-MM-DD)", Date),
        Field::required("payment_method", "Payment Method", Choice(PAYMENT_METHODS)),
    ],
};

static PICKUP_REQUESTS: EntitySpec = EntitySpec {
    name: "Pickup Requests",
    table: "Pickup_Requests",
    key: "pickup_id",
    fields: &[
        Field::required("customer_id", "Customer ID", Reference(Entity::Customers)),
        Field::required("address_id", "Pickup Address ID", Reference(Entity::Addresses)),
        Field::required("pickup_date", "Pickup Date (YYYY-MM-DD)", Date),
        Field::required("pickup_status", "Pickup Status", Choice(PICKUP_STATUSES)),
    ],
};

static DELIVERY_ATTEMPTS: EntitySpec = EntitySpec {
    name: "Delivery Attempts",
    table: "DeliveryAttempts",
    key: "attempt_id",
    fields: &[
        Field::required("shipment_id", "Shipment ID", Reference(Entity::Shipments)),
        Field::required("attempt_date", "Attempt Date (YYYY-MM-DD)", Date),
        Field::required("attempt_status", "Attempt Status", Choice(ATTEMPT_STATUSES)),
        Field::optional("notes", "Notes", Text { max_len: 255 }),
    ],
};
