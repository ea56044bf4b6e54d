pub const BUSINESS_NAME: &str = "FY'S PROPERTY";

pub const LIVENESS_BODY: &str = "FY'S PROPERTY WhatsApp Bot is running.";

pub const WHATSAPP_MESSAGING_PRODUCT: &str = "whatsapp";
pub const WHATSAPP_RECIPIENT_TYPE: &str = "individual";
pub const WHATSAPP_SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

/// Provider caps for interactive messages
pub const MAX_REPLY_BUTTONS: usize = 3;
pub const MAX_LIST_ROWS: usize = 10;

pub const MENU_TEXT: &str = "Welcome to FY'S PROPERTY!\n\
Please reply with the number of the option you need:\n\
1. View property listings\n\
2. Buy a property\n\
3. Sell a property\n\
4. Talk to an agent\n\
5. FAQs";

pub const LISTINGS_TEXT: &str = "Here are our latest property listings:\n\
- 3 bedroom house, Westlands\n\
- 2 bedroom apartment, Kilimani\n\
- Commercial plot, Karen\n\
Reply \"2\" if you would like to buy one of them, or type \"menu\" to go back.";

pub const BUY_TEXT: &str = "To buy a property, please send us:\n\
- Your preferred location\n\
- Your budget\n\
- The type of property you are looking for\n\
An agent will contact you with matching options.";

pub const SELL_TEXT: &str = "To sell your property, please send us:\n\
- The property location\n\
- The property type and size\n\
- Your asking price\n\
An agent will contact you to schedule a valuation.";

pub const AGENT_TEXT: &str = "Your message has been forwarded to our admin. \
One of our agents will get back to you shortly.";

pub const FAQS_TEXT: &str = "Frequently asked questions:\n\
Q: What are your office hours?\n\
A: Monday to Saturday, 8am to 6pm.\n\
Q: Do you charge a viewing fee?\n\
A: No, viewings are free of charge.\n\
Q: Can you help with title deed searches?\n\
A: Yes, our agents assist with all the paperwork.";

pub const FALLBACK_TEXT: &str = "Sorry, I didn't understand that. Type \"menu\" to see options.";

pub const MENU_BUTTONS_BODY: &str = "Hello! How can FY'S PROPERTY help you today?";

pub const MENU_LIST_HEADER: &str = "FY'S PROPERTY";
pub const MENU_LIST_BODY: &str = "Choose one of the options below.";
pub const MENU_LIST_FOOTER: &str = "You can also reply with the option number.";
pub const MENU_LIST_BUTTON_LABEL: &str = "View options";
pub const MENU_LIST_SECTION_TITLE: &str = "Services";

/// `(id, title)` pairs shown in interactive menus, in display order
pub const MENU_ENTRIES: [(&str, &str); 5] = [
    ("option1", "View listings"),
    ("option2", "Buy a property"),
    ("option3", "Sell a property"),
    ("option4", "Talk to an agent"),
    ("option5", "FAQs"),
];
