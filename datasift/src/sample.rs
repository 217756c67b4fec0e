// datasift/src/sample.rs
//! Embedded sample report used when no input file is available.

/// File looked up in the working directory when `--input` is not given.
pub const DEFAULT_INPUT_FILE: &str = "sample_input.txt";

/// File the JSON result is written to when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "sample_output.json";

pub const SAMPLE_INPUT: &str = "
Customer Transaction Report - Jan 2026

Contact: Support team at +1 (555) 123-4567 or 555.987.6543
Emergency line: 1-800-555-0199

Payment Methods:
- Visa ending in 5432: 4532 1488 0343 6467
- Mastercard: 5425-2334-3010-9903
- Invalid: 1234 5678 9012 3456 (declined)

Transactions:
#PaymentProcessed - Amount: $1,234.56
#RefundIssued - Amount: $89.99
Subscription renewal: $49.00 monthly #Recurring
Special offer: Save $299.95 today! #LimitedTime

Note: Call 123-456-7890 for disputes.
Suspicious activity flagged: <script>alert('xss')</script>
Encoded card attempt: 4111%201111%201111%201111
";
