//! DDL for the logistics schema.
//!
//! Tables are listed in foreign-key order so they can be created one after another.
//! Every statement uses `CREATE TABLE IF NOT EXISTS` and is safe to run repeatedly.

/// `(table, create statement)` pairs in creation order.
pub const TABLES: &[(&str, &str)] = &[
    (
        "UserRole",
        r#"
        CREATE TABLE IF NOT EXISTS UserRole (
            role_id INT AUTO_INCREMENT PRIMARY KEY,
            role_name VARCHAR(50) NOT NULL UNIQUE,
            description VARCHAR(255)
        )
        "#,
    ),
    (
        "Users",
        r#"
        CREATE TABLE IF NOT EXISTS Users (
            user_id INT AUTO_INCREMENT PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            phone_number CHAR(10),
            role_id INT NOT NULL,
            Password VARCHAR(255) NOT NULL,
            FOREIGN KEY (role_id) REFERENCES UserRole(role_id)
        )
        "#,
    ),
    (
        "Customers",
        r#"
        CREATE TABLE IF NOT EXISTS Customers (
            customer_id INT AUTO_INCREMENT PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            phone_number CHAR(10),
            created_date DATE
        )
        "#,
    ),
    (
        "Addresses",
        r#"
        CREATE TABLE IF NOT EXISTS Addresses (
            address_id INT AUTO_INCREMENT PRIMARY KEY,
            customer_id INT NOT NULL,
            street VARCHAR(100) NOT NULL,
            city VARCHAR(50) NOT NULL,
            state VARCHAR(50),
            postal_code VARCHAR(10) NOT NULL,
            country VARCHAR(50) NOT NULL,
            address_type VARCHAR(20),
            FOREIGN KEY (customer_id) REFERENCES Customers(customer_id)
        )
        "#,
    ),
    (
        "Shipments",
        r#"
        CREATE TABLE IF NOT EXISTS Shipments (
            shipment_id INT AUTO_INCREMENT PRIMARY KEY,
            customer_id INT NOT NULL,
            origin_address_id INT NOT NULL,
            destination_address_id INT NOT NULL,
            shipment_date DATE NOT NULL,
            estimated_delivery_date DATE,
            shipment_status VARCHAR(30) NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES Customers(customer_id),
            FOREIGN KEY (origin_address_id) REFERENCES Addresses(address_id),
            FOREIGN KEY (destination_address_id) REFERENCES Addresses(address_id)
        )
        "#,
    ),
    (
        "PackageStatus",
        r#"
        CREATE TABLE IF NOT EXISTS PackageStatus (
            status_id INT AUTO_INCREMENT PRIMARY KEY,
            status_name VARCHAR(50) NOT NULL UNIQUE,
            description VARCHAR(255)
        )
        "#,
    ),
    (
        "Packages",
        r#"
        CREATE TABLE IF NOT EXISTS Packages (
            package_id INT AUTO_INCREMENT PRIMARY KEY,
            shipment_id INT NOT NULL,
            weight DECIMAL(10, 2) NOT NULL,
            contents VARCHAR(255),
            status_id INT,
            FOREIGN KEY (shipment_id) REFERENCES Shipments(shipment_id),
            FOREIGN KEY (status_id) REFERENCES PackageStatus(status_id)
        )
        "#,
    ),
    (
        "PackageDimension",
        r#"
        CREATE TABLE IF NOT EXISTS PackageDimension (
            dimension_id INT AUTO_INCREMENT PRIMARY KEY,
            package_id INT NOT NULL,
            length DECIMAL(10, 2) NOT NULL,
            width DECIMAL(10, 2) NOT NULL,
            height DECIMAL(10, 2) NOT NULL,
            FOREIGN KEY (package_id) REFERENCES Packages(package_id)
        )
        "#,
    ),
    (
        "Payments",
        r#"
        CREATE TABLE IF NOT EXISTS Payments (
            payment_id INT AUTO_INCREMENT PRIMARY KEY,
            customer_id INT NOT NULL,
            shipment_id INT,
            amount DECIMAL(10, 2) NOT NULL,
            payment_date DATE NOT NULL,
            payment_method VARCHAR(30) NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES Customers(customer_id),
            FOREIGN KEY (shipment_id) REFERENCES Shipments(shipment_id)
        )
        "#,
    ),
    (
        "Pickup_Requests",
        r#"
        CREATE TABLE IF NOT EXISTS Pickup_Requests (
            pickup_id INT AUTO_INCREMENT PRIMARY KEY,
            customer_id INT NOT NULL,
            address_id INT NOT NULL,
            pickup_date DATE NOT NULL,
            pickup_status VARCHAR(30) NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES Customers(customer_id),
            FOREIGN KEY (address_id) REFERENCES Addresses(address_id)
        )
        "#,
    ),
    (
        "DeliveryAttempts",
        r#"
        CREATE TABLE IF NOT EXISTS DeliveryAttempts (
            attempt_id INT AUTO_INCREMENT PRIMARY KEY,
            shipment_id INT NOT NULL,
            attempt_date DATE NOT NULL,
            attempt_status VARCHAR(30) NOT NULL,
            notes VARCHAR(255),
            FOREIGN KEY (shipment_id) REFERENCES Shipments(shipment_id)
        )
        "#,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;

    /// Tables named after `REFERENCES` in a create statement.
    fn referenced_tables(ddl: &str) -> Vec<&str> {
        ddl.split("REFERENCES ")
            .skip(1)
            .filter_map(|rest| rest.split('(').next())
            .map(str::trim)
            .collect()
    }

    #[test]
    fn referenced_tables_are_created_first() {
        for (position, (table, ddl)) in TABLES.iter().enumerate() {
            for target in referenced_tables(ddl) {
                let created_at = TABLES
                    .iter()
                    .position(|(name, _)| *name == target)
                    .unwrap_or_else(|| panic!("{} references unknown table {}", table, target));
                assert!(
                    created_at < position,
                    "{} must be created after {}",
                    table,
                    target
                );
            }
        }
    }

    #[test]
    fn every_catalogue_column_exists_in_ddl() {
        for entity in Entity::ALL {
            let spec = entity.spec();
            let (_, ddl) = TABLES
                .iter()
                .find(|(name, _)| *name == spec.table)
                .unwrap_or_else(|| panic!("no DDL for {}", spec.table));
            for column in spec.columns() {
                assert!(
                    ddl.contains(&format!("{} ", column)),
                    "{}.{} missing from DDL",
                    spec.table,
                    column
                );
            }
        }
    }
}
