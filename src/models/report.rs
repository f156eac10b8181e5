//! Catalogue of the analytical queries offered under "Complex SQL Queries".
//!
//! All aggregation, ranking and rollup work happens in MySQL; a [`Report`] only
//! carries the statement, the headers to show and, when the query needs one,
//! the parameter to ask the user for.

use crate::error::ValidationError;
use crate::models::Value;
use crate::validation;

/// Token in a report's SQL that expands to one `?` per ID.
const ID_LIST_TOKEN: &str = "{ids}";

/// Input a report asks for before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportParam {
    /// Comma-separated shipment IDs, bound one placeholder each.
    ShipmentIds,
    CustomerId,
    ShipmentId,
    MinimumAmount,
}

impl ReportParam {
    pub fn prompt(self) -> &'static str {
        match self {
            ReportParam::ShipmentIds => "Shipment IDs (comma-separated)",
            ReportParam::CustomerId => "Customer ID",
            ReportParam::ShipmentId => "Shipment ID",
            ReportParam::MinimumAmount => "Minimum total amount",
        }
    }

    fn parse(self, raw: &str) -> Result<Vec<Value>, ValidationError> {
        let label = self.prompt();
        let values = match self {
            ReportParam::ShipmentIds => validation::parse_id_list(label, raw)?
                .into_iter()
                .map(Value::Int)
                .collect(),
            ReportParam::CustomerId | ReportParam::ShipmentId => {
                vec![Value::Int(validation::parse_id(label, raw)?)]
            },
            ReportParam::MinimumAmount => {
                vec![Value::Decimal(validation::parse_decimal(label, raw)?)]
            },
        };
        Ok(values)
    }
}

/// A statement ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub sql: String,
    pub binds: Vec<Value>,
}

/// One canned analytical query.
#[derive(Debug)]
pub struct Report {
    pub title: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
    pub headers: &'static [&'static str],
    pub param: Option<ReportParam>,
    /// Labels for NULL cells, by column index (rollup subtotal rows).
    pub null_labels: &'static [(usize, &'static str)],
    pub empty_message: &'static str,
}

impl Report {
    /// Binds the user's input (if the report takes any) into a parameterized statement.
    pub fn prepare(&self, raw_param: Option<&str>) -> Result<PreparedQuery, ValidationError> {
        let Some(param) = self.param else {
            return Ok(PreparedQuery {
                sql: self.sql.to_string(),
                binds: Vec::new(),
            });
        };

        let binds = param.parse(raw_param.unwrap_or(""))?;
        let sql = if self.sql.contains(ID_LIST_TOKEN) {
            let placeholders = vec!["?"; binds.len()].join(", ");
            self.sql.replace(ID_LIST_TOKEN, &placeholders)
        } else {
            self.sql.to_string()
        };
        Ok(PreparedQuery { sql, binds })
    }
}

/// Groups of reports, one submenu each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Olap,
    WindowFunctions,
    SetOperations,
    SetMembership,
    SetComparison,
    AdvancedAggregates,
    WithClause,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 7] = [
        ReportCategory::Olap,
        ReportCategory::WindowFunctions,
        ReportCategory::SetOperations,
        ReportCategory::SetMembership,
        ReportCategory::SetComparison,
        ReportCategory::AdvancedAggregates,
        ReportCategory::WithClause,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportCategory::Olap => "OLAP Queries",
            ReportCategory::WindowFunctions => "Window Function Queries",
            ReportCategory::SetOperations => "Set Operations",
            ReportCategory::SetMembership => "Set Membership Queries",
            ReportCategory::SetComparison => "Set Comparison Queries",
            ReportCategory::AdvancedAggregates => "Advanced Aggregate Functions",
            ReportCategory::WithClause => "Subqueries Using WITH Clause",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportCategory::Olap => "Analyze multidimensional data",
            ReportCategory::WindowFunctions => "Row-level ranking and running totals",
            ReportCategory::SetOperations => "Combine and compare datasets",
            ReportCategory::SetMembership => "Set inclusion and exclusion",
            ReportCategory::SetComparison => "Compare values against whole sets",
            ReportCategory::AdvancedAggregates => "Statistics across groups",
            ReportCategory::WithClause => "Named subqueries for multi-step analysis",
        }
    }

    pub fn reports(self) -> &'static [Report] {
        match self {
            ReportCategory::Olap => OLAP,
            ReportCategory::WindowFunctions => WINDOW_FUNCTIONS,
            ReportCategory::SetOperations => SET_OPERATIONS,
            ReportCategory::SetMembership => SET_MEMBERSHIP,
            ReportCategory::SetComparison => SET_COMPARISON,
            ReportCategory::AdvancedAggregates => ADVANCED_AGGREGATES,
            ReportCategory::WithClause => WITH_CLAUSE,
        }
    }
}

static OLAP: &[Report] = &[
    Report {
        title: "Distribution of Pickup Request Statuses",
        description: "Share of pickup requests in each status",
        sql: r#"
            WITH StatusCounts AS (
                SELECT pickup_status,
                       COUNT(*) AS status_count,
                       COUNT(*) * 100.0 / SUM(COUNT(*)) OVER () AS percentage
                FROM Pickup_Requests
                GROUP BY pickup_status
            )
            SELECT pickup_status, status_count, ROUND(percentage, 2) AS percentage
            FROM StatusCounts
            ORDER BY status_count DESC
        "#,
        headers: &["Pickup Status", "Count", "Percentage (%)"],
        param: None,
        null_labels: &[],
        empty_message: "No data found. Ensure pickup requests are recorded in the system.",
    },
    Report {
        title: "Monthly Payments with Rollup",
        description: "Payment totals by year, month and customer with subtotals",
        sql: r#"
            SELECT YEAR(p.payment_date) AS year,
                   MONTH(p.payment_date) AS month,
                   c.first_name,
                   COUNT(p.payment_id) AS total_payments,
                   SUM(p.amount) AS total_amount
            FROM Payments p
            JOIN Customers c ON p.customer_id = c.customer_id
            GROUP BY YEAR(p.payment_date), MONTH(p.payment_date), c.first_name WITH ROLLUP
        "#,
        headers: &["Year", "Month", "Customer", "Payments", "Amount"],
        param: None,
        null_labels: &[(0, "Total"), (1, ""), (2, "")],
        empty_message: "No payment data found. Ensure there are payments recorded in the database.",
    },
    Report {
        title: "Daily Delivery Success Rate",
        description: "Successful delivery attempts per day",
        sql: r#"
            SELECT DATE(attempt_date) AS delivery_date,
                   COUNT(*) AS total_attempts,
                   SUM(CASE WHEN attempt_status = 'Success' THEN 1 ELSE 0 END) AS successful_attempts,
                   ROUND(SUM(CASE WHEN attempt_status = 'Success' THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS success_rate
            FROM DeliveryAttempts
            GROUP BY DATE(attempt_date)
            ORDER BY delivery_date
        "#,
        headers: &["Date", "Total Attempts", "Successes", "Success Rate (%)"],
        param: None,
        null_labels: &[],
        empty_message: "No delivery attempt data available.",
    },
    Report {
        title: "Customer Shipment Volume with Percentile Rank",
        description: "Rank customers by number of shipments",
        sql: r#"
            WITH CustomerShipmentVolume AS (
                SELECT customer_id, COUNT(shipment_id) AS total_shipments
                FROM Shipments
                GROUP BY customer_id
            )
            SELECT csv.customer_id,
                   csv.total_shipments,
                   ROUND(PERCENT_RANK() OVER (ORDER BY csv.total_shipments DESC), 2) AS shipment_percentile
            FROM CustomerShipmentVolume csv
            ORDER BY shipment_percentile, csv.customer_id
        "#,
        headers: &["Customer ID", "Total Shipments", "Percentile"],
        param: None,
        null_labels: &[],
        empty_message: "No shipment data available for customers.",
    },
];

static WINDOW_FUNCTIONS: &[Report] = &[
    Report {
        title: "Customer Payment Ranking",
        description: "Rank customers by total amount paid",
        sql: r#"
            SELECT c.customer_id,
                   CONCAT(c.first_name, ' ', c.last_name) AS customer,
                   SUM(p.amount) AS total_paid,
                   RANK() OVER (ORDER BY SUM(p.amount) DESC) AS payment_rank,
                   DENSE_RANK() OVER (ORDER BY SUM(p.amount) DESC) AS dense_payment_rank
            FROM Customers c
            JOIN Payments p ON p.customer_id = c.customer_id
            GROUP BY c.customer_id, c.first_name, c.last_name
            ORDER BY payment_rank, c.customer_id
        "#,
        headers: &["Customer ID", "Customer", "Total Paid", "Rank", "Dense Rank"],
        param: None,
        null_labels: &[],
        empty_message: "No payments recorded yet.",
    },
    Report {
        title: "Running Payment Totals per Customer",
        description: "Cumulative amount paid by each customer over time",
        sql: r#"
            SELECT p.customer_id,
                   p.payment_id,
                   p.payment_date,
                   p.amount,
                   SUM(p.amount) OVER (
                       PARTITION BY p.customer_id
                       ORDER BY p.payment_date, p.payment_id
                   ) AS running_total
            FROM Payments p
            ORDER BY p.customer_id, p.payment_date, p.payment_id
        "#,
        headers: &["Customer ID", "Payment ID", "Date", "Amount", "Running Total"],
        param: None,
        null_labels: &[],
        empty_message: "No payments recorded yet.",
    },
    Report {
        title: "Delivery Attempt History",
        description: "Attempt sequence and previous outcome per shipment",
        sql: r#"
            SELECT shipment_id,
                   attempt_id,
                   attempt_date,
                   attempt_status,
                   ROW_NUMBER() OVER w AS attempt_number,
                   LAG(attempt_status) OVER w AS previous_status
            FROM DeliveryAttempts
            WINDOW w AS (PARTITION BY shipment_id ORDER BY attempt_date, attempt_id)
            ORDER BY shipment_id, attempt_number
        "#,
        headers: &["Shipment ID", "Attempt ID", "Date", "Status", "Attempt #", "Previous Status"],
        param: None,
        null_labels: &[(5, "-")],
        empty_message: "No delivery attempts recorded yet.",
    },
    Report {
        title: "Package Weight Share within Shipment",
        description: "Each package's share of its shipment weight and weight quartile",
        sql: r#"
            SELECT package_id,
                   shipment_id,
                   weight,
                   ROUND(
                       weight * 100.0 / NULLIF(SUM(weight) OVER (PARTITION BY shipment_id), 0),
                       2
                   ) AS weight_share,
                   NTILE(4) OVER (ORDER BY weight) AS weight_quartile
            FROM Packages
            ORDER BY shipment_id, weight DESC
        "#,
        headers: &["Package ID", "Shipment ID", "Weight", "Share of Shipment (%)", "Quartile"],
        param: None,
        null_labels: &[(3, "-")],
        empty_message: "No packages recorded yet.",
    },
];

static SET_OPERATIONS: &[Report] = &[
    Report {
        title: "Customers with Shipments or Pickup Requests (UNION)",
        description: "Every customer active through either channel",
        sql: r#"
            SELECT c.customer_id, c.first_name, c.last_name, 'Shipment' AS activity
            FROM Customers c
            WHERE c.customer_id IN (SELECT customer_id FROM Shipments)
            UNION
            SELECT c.customer_id, c.first_name, c.last_name, 'Pickup Request' AS activity
            FROM Customers c
            WHERE c.customer_id IN (SELECT customer_id FROM Pickup_Requests)
            ORDER BY customer_id, activity
        "#,
        headers: &["Customer ID", "First Name", "Last Name", "Activity"],
        param: None,
        null_labels: &[],
        empty_message: "No customer activity recorded yet.",
    },
    Report {
        title: "Customers Who Shipped and Paid (INTERSECT)",
        description: "Customers present in both Shipments and Payments",
        sql: r#"
            SELECT c.customer_id, c.first_name, c.last_name, c.email
            FROM Customers c
            WHERE c.customer_id IN (
                SELECT customer_id FROM Shipments
                INTERSECT
                SELECT customer_id FROM Payments
            )
            ORDER BY c.customer_id
        "#,
        headers: &["Customer ID", "First Name", "Last Name", "Email"],
        param: None,
        null_labels: &[],
        empty_message: "No customer has both shipments and payments.",
    },
    Report {
        title: "Customers with Unpaid Shipments (EXCEPT)",
        description: "Customers who shipped but never paid",
        sql: r#"
            SELECT c.customer_id, c.first_name, c.last_name, c.email
            FROM Customers c
            WHERE c.customer_id IN (
                SELECT customer_id FROM Shipments
                EXCEPT
                SELECT customer_id FROM Payments
            )
            ORDER BY c.customer_id
        "#,
        headers: &["Customer ID", "First Name", "Last Name", "Email"],
        param: None,
        null_labels: &[],
        empty_message: "Every customer with shipments has made a payment.",
    },
];

static SET_MEMBERSHIP: &[Report] = &[
    Report {
        title: "Packages in Selected Shipments (IN)",
        description: "Packages belonging to a list of shipment IDs",
        sql: r#"
            SELECT p.package_id, p.shipment_id, p.weight, p.contents, ps.status_name
            FROM Packages p
            LEFT JOIN PackageStatus ps ON ps.status_id = p.status_id
            WHERE p.shipment_id IN ({ids})
            ORDER BY p.shipment_id, p.package_id
        "#,
        headers: &["Package ID", "Shipment ID", "Weight", "Contents", "Status"],
        param: Some(ReportParam::ShipmentIds),
        null_labels: &[(3, ""), (4, "Unassigned")],
        empty_message: "No packages found for the given shipments.",
    },
    Report {
        title: "Customers Without Pickup Requests (NOT IN)",
        description: "Customers who have never requested a pickup",
        sql: r#"
            SELECT c.customer_id, c.first_name, c.last_name, c.email
            FROM Customers c
            WHERE c.customer_id NOT IN (
                SELECT customer_id FROM Pickup_Requests WHERE customer_id IS NOT NULL
            )
            ORDER BY c.customer_id
        "#,
        headers: &["Customer ID", "First Name", "Last Name", "Email"],
        param: None,
        null_labels: &[],
        empty_message: "Every customer has requested a pickup.",
    },
    Report {
        title: "Shipments with Failed Delivery Attempts (EXISTS)",
        description: "Shipments that had at least one failed attempt",
        sql: r#"
            SELECT s.shipment_id, s.customer_id, s.shipment_date, s.shipment_status
            FROM Shipments s
            WHERE EXISTS (
                SELECT 1 FROM DeliveryAttempts d
                WHERE d.shipment_id = s.shipment_id AND d.attempt_status = 'Failed'
            )
            ORDER BY s.shipment_id
        "#,
        headers: &["Shipment ID", "Customer ID", "Shipment Date", "Status"],
        param: None,
        null_labels: &[],
        empty_message: "No shipment has a failed delivery attempt.",
    },
];

static SET_COMPARISON: &[Report] = &[
    Report {
        title: "Payments Larger Than All of a Customer's Payments (ALL)",
        description: "Payments exceeding every payment made by the given customer \
                      (nothing is listed for a customer without payments)",
        sql: r#"
            SELECT p.payment_id, p.customer_id, p.amount, p.payment_date
            FROM Payments p
            CROSS JOIN (SELECT ? AS customer_id) target
            WHERE EXISTS (SELECT 1 FROM Payments x WHERE x.customer_id = target.customer_id)
              AND p.amount > ALL (
                  SELECT amount FROM Payments WHERE customer_id = target.customer_id
              )
            ORDER BY p.amount DESC, p.payment_id
        "#,
        headers: &["Payment ID", "Customer ID", "Amount", "Date"],
        param: Some(ReportParam::CustomerId),
        null_labels: &[],
        empty_message: "No payment exceeds all of that customer's payments, \
                        or the customer has made none.",
    },
    Report {
        title: "Packages Heavier Than Any Package in a Shipment (ANY)",
        description: "Packages heavier than at least one package of the given shipment",
        sql: r#"
            SELECT p.package_id, p.shipment_id, p.weight
            FROM Packages p
            WHERE p.weight > ANY (SELECT weight FROM Packages WHERE shipment_id = ?)
            ORDER BY p.weight DESC, p.package_id
        "#,
        headers: &["Package ID", "Shipment ID", "Weight"],
        param: Some(ReportParam::ShipmentId),
        null_labels: &[],
        empty_message: "No heavier packages found.",
    },
    Report {
        title: "Customers Whose Shipments Were All Delivered",
        description: "Customers with at least one shipment, every one of them delivered",
        sql: r#"
            SELECT c.customer_id, c.first_name, c.last_name
            FROM Customers c
            WHERE 'Delivered' = ALL (
                SELECT s.shipment_status FROM Shipments s WHERE s.customer_id = c.customer_id
            )
            AND EXISTS (SELECT 1 FROM Shipments s WHERE s.customer_id = c.customer_id)
            ORDER BY c.customer_id
        "#,
        headers: &["Customer ID", "First Name", "Last Name"],
        param: None,
        null_labels: &[],
        empty_message: "No customer has all shipments delivered.",
    },
];

static ADVANCED_AGGREGATES: &[Report] = &[
    Report {
        title: "Payment Statistics by Method",
        description: "Count, total, average, spread of payments per method",
        sql: r#"
            SELECT payment_method,
                   COUNT(*) AS payments,
                   SUM(amount) AS total,
                   ROUND(AVG(amount), 2) AS average,
                   MIN(amount) AS smallest,
                   MAX(amount) AS largest,
                   ROUND(STDDEV_POP(amount), 2) AS std_dev
            FROM Payments
            GROUP BY payment_method
            ORDER BY total DESC
        "#,
        headers: &["Method", "Payments", "Total", "Average", "Min", "Max", "Std Dev"],
        param: None,
        null_labels: &[],
        empty_message: "No payments recorded yet.",
    },
    Report {
        title: "Package Volume and Weight by Status",
        description: "Average volume and total weight of packages per status",
        sql: r#"
            WITH PackageVolume AS (
                SELECT package_id, AVG(length * width * height) AS volume
                FROM PackageDimension
                GROUP BY package_id
            )
            SELECT COALESCE(ps.status_name, 'Unassigned') AS status,
                   COUNT(*) AS packages,
                   ROUND(AVG(v.volume), 2) AS avg_volume,
                   ROUND(SUM(p.weight), 2) AS total_weight
            FROM Packages p
            LEFT JOIN PackageStatus ps ON ps.status_id = p.status_id
            LEFT JOIN PackageVolume v ON v.package_id = p.package_id
            GROUP BY ps.status_name
            ORDER BY packages DESC
        "#,
        headers: &["Status", "Packages", "Avg Volume (cm³)", "Total Weight (kg)"],
        param: None,
        null_labels: &[(2, "-")],
        empty_message: "No packages recorded yet.",
    },
    Report {
        title: "High-Value Customers (HAVING)",
        description: "Customers whose total payments exceed a threshold",
        sql: r#"
            SELECT c.customer_id,
                   CONCAT(c.first_name, ' ', c.last_name) AS customer,
                   COUNT(p.payment_id) AS payments,
                   SUM(p.amount) AS total_paid,
                   GROUP_CONCAT(DISTINCT p.payment_method ORDER BY p.payment_method SEPARATOR ', ') AS methods
            FROM Customers c
            JOIN Payments p ON p.customer_id = c.customer_id
            GROUP BY c.customer_id, c.first_name, c.last_name
            HAVING SUM(p.amount) > ?
            ORDER BY total_paid DESC
        "#,
        headers: &["Customer ID", "Customer", "Payments", "Total Paid", "Methods"],
        param: Some(ReportParam::MinimumAmount),
        null_labels: &[],
        empty_message: "No customer exceeds that amount.",
    },
];

static WITH_CLAUSE: &[Report] = &[
    Report {
        title: "Customer Revenue Summary",
        description: "Shipments, revenue and revenue per shipment for every customer",
        sql: r#"
            WITH ShipmentTotals AS (
                SELECT customer_id, COUNT(*) AS shipments
                FROM Shipments
                GROUP BY customer_id
            ),
            PaymentTotals AS (
                SELECT customer_id, SUM(amount) AS revenue
                FROM Payments
                GROUP BY customer_id
            )
            SELECT c.customer_id,
                   CONCAT(c.first_name, ' ', c.last_name) AS customer,
                   COALESCE(st.shipments, 0) AS shipments,
                   COALESCE(pt.revenue, 0) AS revenue,
                   ROUND(COALESCE(pt.revenue, 0) / NULLIF(st.shipments, 0), 2) AS revenue_per_shipment
            FROM Customers c
            LEFT JOIN ShipmentTotals st ON st.customer_id = c.customer_id
            LEFT JOIN PaymentTotals pt ON pt.customer_id = c.customer_id
            ORDER BY revenue DESC, c.customer_id
        "#,
        headers: &["Customer ID", "Customer", "Shipments", "Revenue", "Revenue / Shipment"],
        param: None,
        null_labels: &[(4, "-")],
        empty_message: "No customers recorded yet.",
    },
    Report {
        title: "Latest Delivery Attempt per Shipment",
        description: "Number of attempts and the most recent outcome",
        sql: r#"
            WITH RankedAttempts AS (
                SELECT shipment_id,
                       attempt_date,
                       attempt_status,
                       ROW_NUMBER() OVER (PARTITION BY shipment_id ORDER BY attempt_date DESC, attempt_id DESC) AS rn,
                       COUNT(*) OVER (PARTITION BY shipment_id) AS attempts
                FROM DeliveryAttempts
            )
            SELECT s.shipment_id, s.shipment_status, ra.attempts, ra.attempt_date, ra.attempt_status
            FROM Shipments s
            JOIN RankedAttempts ra ON ra.shipment_id = s.shipment_id AND ra.rn = 1
            ORDER BY s.shipment_id
        "#,
        headers: &["Shipment ID", "Shipment Status", "Attempts", "Last Attempt", "Last Outcome"],
        param: None,
        null_labels: &[],
        empty_message: "No delivery attempts recorded yet.",
    },
    Report {
        title: "Pending Pickup Backlog by City",
        description: "Open pickup requests grouped by pickup city",
        sql: r#"
            WITH OpenPickups AS (
                SELECT pr.pickup_id, pr.pickup_date, a.city
                FROM Pickup_Requests pr
                JOIN Addresses a ON a.address_id = pr.address_id
                WHERE pr.pickup_status IN ('Pending', 'Scheduled')
            )
            SELECT city,
                   COUNT(*) AS open_requests,
                   MIN(pickup_date) AS oldest_request,
                   MAX(pickup_date) AS newest_request
            FROM OpenPickups
            GROUP BY city
            ORDER BY open_requests DESC, city
        "#,
        headers: &["City", "Open Requests", "Oldest", "Newest"],
        param: None,
        null_labels: &[],
        empty_message: "No open pickup requests.",
    },
];
