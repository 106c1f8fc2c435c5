//! Column tables for every dataset kind.
//!
//! Resolver lists name the same logical field under every convention the
//! backend uses for it. Order matters: the first key holding a value wins, so
//! pre-formatted fields (`amount_formatted`, `formatted_date`) and snake_case
//! keys come before camelCase and nested fallbacks.

use super::{ColumnSpec, DatasetKind, FormatRule};

const TEXT: FormatRule = FormatRule::Identity;
const DATE: FormatRule = FormatRule::DateOrRaw;
const MONEY: FormatRule = FormatRule::Currency;
const DAYS: FormatRule = FormatRule::DurationDays;
const PERCENT: FormatRule = FormatRule::Percentage;
const TITLE: FormatRule = FormatRule::TitleCase {
    replace_underscore_with_space: false,
};
const TITLE_SPACED: FormatRule = FormatRule::TitleCase {
    replace_underscore_with_space: true,
};
const YES_NO: FormatRule = FormatRule::BooleanLabel {
    true_text: "Yes",
    false_text: "No",
};

static USERS: &[ColumnSpec] = &[
    ColumnSpec::new("ID", &["id", "user_id", "userId"], TEXT),
    ColumnSpec::new("Name", &["name", "full_name", "fullName"], TEXT),
    ColumnSpec::new("Email", &["email"], TEXT),
    ColumnSpec::new("Phone", &["phone", "phone_number", "phoneNumber"], TEXT),
    ColumnSpec::new("Role", &["role", "user_type", "userType"], TITLE),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new(
        "Verified",
        &["is_verified", "isVerified", "email_verified"],
        YES_NO,
    ),
    ColumnSpec::count("Orders", &["orders_count", "ordersCount"]),
    ColumnSpec::new(
        "Wallet Balance",
        &["wallet_balance", "walletBalance", "wallet.balance"],
        MONEY,
    ),
    ColumnSpec::new("Joined", &["formatted_date", "created_at", "createdAt"], DATE),
];

static ORDERS: &[ColumnSpec] = &[
    ColumnSpec::new("Order ID", &["order_id", "orderId", "id"], TEXT),
    ColumnSpec::new(
        "Customer",
        &["user_name", "userName", "user.name", "buyer.name"],
        TEXT,
    ),
    ColumnSpec::new("Email", &["user_email", "userEmail", "user.email"], TEXT),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::count("Items", &["items_count", "itemsCount", "quantity"]),
    ColumnSpec::new(
        "Amount",
        &["amount_formatted", "total_amount", "totalAmount", "amount"],
        MONEY,
    ),
    ColumnSpec::new(
        "Payment Status",
        &["payment_status", "paymentStatus"],
        TITLE,
    ),
    ColumnSpec::new("Status", &["status", "order_status", "orderStatus"], TITLE),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static CHATS: &[ColumnSpec] = &[
    ColumnSpec::new("Chat ID", &["chat_id", "chatId", "id"], TEXT),
    ColumnSpec::new("Buyer", &["buyer_name", "buyerName", "buyer.name"], TEXT),
    ColumnSpec::new(
        "Seller",
        &["seller_name", "sellerName", "store.name", "seller.name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Last Message",
        &["last_message_text", "lastMessage", "last_message.body"],
        TEXT,
    ),
    ColumnSpec::count("Unread", &["unread_count", "unreadCount"]),
    ColumnSpec::new("Type", &["chat_type", "chatType", "type"], TITLE),
    ColumnSpec::new(
        "Last Activity",
        &["formatted_date", "updated_at", "updatedAt"],
        DATE,
    ),
];

static TRANSACTIONS: &[ColumnSpec] = &[
    ColumnSpec::new(
        "Reference",
        &["reference", "tx_ref", "txRef", "id"],
        TEXT,
    ),
    ColumnSpec::new("User", &["user_name", "userName", "user.name"], TEXT),
    ColumnSpec::new("Type", &["transaction_type", "transactionType", "type"], TITLE),
    ColumnSpec::new("Amount", &["amount_formatted", "amount"], MONEY),
    ColumnSpec::new(
        "Channel",
        &["payment_method", "paymentMethod", "channel"],
        TITLE,
    ),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new("Date", &["formatted_date"], DATE),
];

static PRODUCTS: &[ColumnSpec] = &[
    ColumnSpec::new("Product ID", &["product_id", "productId", "id"], TEXT),
    ColumnSpec::new("Name", &["name", "title"], TEXT),
    ColumnSpec::new(
        "Category",
        &["category_name", "categoryName", "category.name"],
        TEXT,
    ),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::new(
        "Price",
        &["price_formatted", "discount_price", "discountPrice", "price"],
        MONEY,
    ),
    ColumnSpec::count("Stock", &["stock", "quantity", "stock_quantity"]),
    ColumnSpec::count("Sold", &["sold_count", "soldCount"]),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new("Featured", &["is_featured", "isFeatured"], YES_NO),
    ColumnSpec::new(
        "Date Added",
        &["formatted_date", "created_at", "createdAt"],
        DATE,
    ),
];

static SERVICES: &[ColumnSpec] = &[
    ColumnSpec::new("Service ID", &["service_id", "serviceId", "id"], TEXT),
    ColumnSpec::new("Name", &["name", "title"], TEXT),
    ColumnSpec::new(
        "Category",
        &["category_name", "categoryName", "category.title"],
        TEXT,
    ),
    ColumnSpec::new(
        "Provider",
        &["store_name", "storeName", "store.name", "provider.name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Price",
        &["price_formatted", "price_from", "priceFrom", "price"],
        MONEY,
    ),
    ColumnSpec::new(
        "Delivery Time",
        &["delivery_days", "deliveryDays", "duration"],
        DAYS,
    ),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static STORES: &[ColumnSpec] = &[
    ColumnSpec::new("Store ID", &["store_id", "storeId", "id"], TEXT),
    ColumnSpec::new("Store Name", &["store_name", "storeName", "name"], TEXT),
    ColumnSpec::new(
        "Owner",
        &["owner_name", "ownerName", "user.name", "owner.name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Email",
        &["store_email", "storeEmail", "email", "user.email"],
        TEXT,
    ),
    ColumnSpec::new("Phone", &["store_phone", "storePhone", "phone"], TEXT),
    ColumnSpec::new(
        "Location",
        &["store_location", "storeLocation", "address"],
        TEXT,
    ),
    ColumnSpec::new("Category", &["category", "store_category"], TITLE),
    ColumnSpec::count("Products", &["products_count", "productsCount"]),
    ColumnSpec::count("Orders", &["orders_count", "ordersCount"]),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new(
        "Verified",
        &["is_verified", "isVerified"],
        FormatRule::BooleanLabel {
            true_text: "Verified",
            false_text: "Unverified",
        },
    ),
    ColumnSpec::new(
        "Date Joined",
        &["formatted_date", "created_at", "createdAt"],
        DATE,
    ),
];

static SUBSCRIPTIONS: &[ColumnSpec] = &[
    ColumnSpec::new("Plan", &["plan_name", "planName", "plan.name", "name"], TEXT),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::new(
        "Amount",
        &["amount_formatted", "amount", "price"],
        FormatRule::CurrencyFromField("currency"),
    ),
    ColumnSpec::new("Duration", &["duration_days", "durationDays", "duration"], DAYS),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new("Auto Renew", &["auto_renew", "autoRenew"], YES_NO),
    ColumnSpec::new("Start Date", &["start_date", "startDate"], DATE),
    ColumnSpec::new(
        "End Date",
        &["end_date", "endDate", "expires_at", "expiresAt"],
        DATE,
    ),
];

static PROMOTIONS: &[ColumnSpec] = &[
    ColumnSpec::new("Title", &["title", "name"], TEXT),
    ColumnSpec::new("Code", &["promo_code", "promoCode", "code"], TEXT),
    ColumnSpec::new(
        "Type",
        &["promotion_type", "promotionType", "type"],
        TITLE_SPACED,
    ),
    ColumnSpec::new(
        "Discount",
        &["discount_percentage", "discountPercentage", "discount"],
        PERCENT,
    ),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::new(
        "Amount Paid",
        &["amount_formatted", "amount_paid", "amountPaid", "amount"],
        MONEY,
    ),
    ColumnSpec::new("Duration", &["duration_days", "durationDays", "duration"], DAYS),
    ColumnSpec::count("Clicks", &["clicks", "click_count", "clickCount"]),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new("Start Date", &["start_date", "startDate"], DATE),
    ColumnSpec::new("End Date", &["end_date", "endDate"], DATE),
];

static SUPPORT: &[ColumnSpec] = &[
    ColumnSpec::new("Ticket ID", &["ticket_id", "ticketId", "id"], TEXT),
    ColumnSpec::new("User", &["user_name", "userName", "user.name"], TEXT),
    ColumnSpec::new("Email", &["user_email", "userEmail", "user.email"], TEXT),
    ColumnSpec::new("Subject", &["subject", "title"], TEXT),
    ColumnSpec::new("Category", &["category", "issue_type", "issueType"], TITLE),
    ColumnSpec::new("Priority", &["priority"], TITLE),
    ColumnSpec::new("Status", &["status"], TITLE_SPACED),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static DISPUTES: &[ColumnSpec] = &[
    ColumnSpec::new("Dispute ID", &["dispute_id", "disputeId", "id"], TEXT),
    ColumnSpec::new(
        "Buyer",
        &["dispute_chat.buyer.name", "buyer.name", "buyer_name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Seller",
        &["dispute_chat.seller.name", "store.name", "seller_name"],
        TEXT,
    ),
    ColumnSpec::new("Order ID", &["order_id", "orderId", "order.order_id"], TEXT),
    ColumnSpec::new(
        "Category",
        &["category", "dispute_category", "disputeCategory"],
        TITLE,
    ),
    ColumnSpec::new(
        "Amount",
        &["amount_formatted", "amount", "order.total_amount"],
        MONEY,
    ),
    ColumnSpec::new("Status", &["dispute_status", "disputeStatus", "status"], TITLE_SPACED),
    ColumnSpec::new(
        "Resolution",
        &["resolution", "resolution_note", "resolutionNote"],
        TEXT,
    ),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static RATINGS: &[ColumnSpec] = &[
    ColumnSpec::new("Reviewer", &["user_name", "userName", "user.name"], TEXT),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::new(
        "Product",
        &["product_name", "productName", "product.name"],
        TEXT,
    ),
    ColumnSpec::new("Rating", &["rating", "stars"], TEXT),
    ColumnSpec::new("Comment", &["comment", "review"], TEXT),
    ColumnSpec::new("Visible", &["is_visible", "isVisible"], YES_NO),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static NOTIFICATIONS: &[ColumnSpec] = &[
    ColumnSpec::new("Title", &["title", "subject"], TEXT),
    ColumnSpec::new("Message", &["message", "body", "content"], TEXT),
    ColumnSpec::new(
        "Audience",
        &["audience", "recipient_type", "recipientType"],
        TITLE,
    ),
    ColumnSpec::new("Channel", &["channel", "notification_type", "type"], TITLE),
    ColumnSpec::new(
        "Read",
        &["is_read", "isRead"],
        FormatRule::BooleanLabel {
            true_text: "Read",
            false_text: "Unread",
        },
    ),
    ColumnSpec::count("Recipients", &["recipients_count", "recipientsCount"]),
    ColumnSpec::new(
        "Sent",
        &["formatted_date", "sent_at", "sentAt", "created_at"],
        DATE,
    ),
];

static BANNERS: &[ColumnSpec] = &[
    ColumnSpec::new("Title", &["title", "name"], TEXT),
    ColumnSpec::new("Position", &["position", "placement"], TITLE),
    ColumnSpec::new("Link", &["link", "redirect_url", "redirectUrl", "url"], TEXT),
    ColumnSpec::new("Image", &["image_url", "imageUrl", "image"], TEXT),
    ColumnSpec::count("Clicks", &["clicks", "click_count", "clickCount"]),
    ColumnSpec::new(
        "Active",
        &["is_active", "isActive"],
        FormatRule::BooleanLabel {
            true_text: "Active",
            false_text: "Inactive",
        },
    ),
    ColumnSpec::new("Date", &["formatted_date", "created_at", "createdAt"], DATE),
];

static WITHDRAWALS: &[ColumnSpec] = &[
    ColumnSpec::new("Request ID", &["reference", "id"], TEXT),
    ColumnSpec::new("Store", &["store_name", "storeName", "store.name"], TEXT),
    ColumnSpec::new(
        "Account Name",
        &["account_name", "accountName", "bank_account.account_name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Bank",
        &["bank_name", "bankName", "bank_account.bank_name"],
        TEXT,
    ),
    ColumnSpec::new(
        "Account Number",
        &["account_number", "accountNumber", "bank_account.account_number"],
        TEXT,
    ),
    ColumnSpec::new("Amount", &["amount_formatted", "amount"], MONEY),
    ColumnSpec::new("Status", &["status"], TITLE),
    ColumnSpec::new(
        "Date Requested",
        &["formatted_date", "created_at", "createdAt"],
        DATE,
    ),
];

/// Ordered column specs of a dataset kind.
pub fn column_specs(kind: DatasetKind) -> &'static [ColumnSpec] {
    match kind {
        DatasetKind::Users => USERS,
        DatasetKind::Orders => ORDERS,
        DatasetKind::Chats => CHATS,
        DatasetKind::Transactions => TRANSACTIONS,
        DatasetKind::Products => PRODUCTS,
        DatasetKind::Services => SERVICES,
        DatasetKind::Stores => STORES,
        DatasetKind::Subscriptions => SUBSCRIPTIONS,
        DatasetKind::Promotions => PROMOTIONS,
        DatasetKind::Support => SUPPORT,
        DatasetKind::Disputes => DISPUTES,
        DatasetKind::Ratings => RATINGS,
        DatasetKind::Notifications => NOTIFICATIONS,
        DatasetKind::Banners => BANNERS,
        DatasetKind::Withdrawals => WITHDRAWALS,
    }
}
