use rand::{Rng, RngCore};

use super::{
    BusinessCatalog, Catalogs, ColorScheme, DesignStyle, LayoutConstraint, MetricTemplate,
    NameCatalog, ProjectArchetype, ScenarioTemplate, WordPair,
};

pub(super) static BUILTIN: Catalogs = Catalogs {
    archetypes: ARCHETYPES,
    domains: DOMAINS,
    ai_technologies: &[
        "GPT-4 Turbo", "Claude 3 Opus", "Gemini Pro", "LLaMA 2", "Mistral 7B",
        "GPT-5 Preview", "Claude Sonnet", "PaLM 2", "Falcon 40B", "Anthropic Constitutional AI",
    ],
    ml_frameworks: &[
        "TensorFlow 2.0", "PyTorch Lightning", "JAX", "Hugging Face Transformers",
        "scikit-learn", "XGBoost", "LightGBM", "ONNX Runtime", "Apache MXNet",
    ],
    vector_databases: &["Pinecone", "Weaviate", "Qdrant", "Milvus", "ChromaDB", "Faiss", "Vespa"],
    cloud_platforms: &[
        "AWS SageMaker", "Google Cloud Vertex AI", "Azure ML Studio",
        "Kubernetes", "Docker Swarm", "Apache Airflow", "Databricks",
    ],
    backends: &[
        "FastAPI", "Node.js + Express", "Django REST", "Spring Boot",
        "Go + Gin", "Rust + Actix", "Ruby on Rails", "Phoenix (Elixir)",
    ],
    design_styles: DESIGN_STYLES,
    color_schemes: COLOR_SCHEMES,
    features: FEATURES,
    metrics: METRICS,
    scenarios: SCENARIOS,
    generic_scenario,
    tagline_actions: &[
        "Transforming", "Revolutionizing", "Optimizing", "Streamlining",
        "Enhancing", "Automating", "Accelerating", "Empowering",
    ],
    tagline_outcomes: &[
        "efficiency", "productivity", "insights", "decisions",
        "workflows", "operations", "performance", "intelligence",
    ],
    names: NAMES,
    business: BUSINESS,
    layouts: LAYOUTS,
    fallback_jobs: FALLBACK_JOBS,
};

const ARCHETYPES: &[ProjectArchetype] = &[
    ProjectArchetype { name: "Hotel PMS Integration Dashboard", keywords: &["FIAS protocol", "room status sync", "reservation management"] },
    ProjectArchetype { name: "Fire Sprinkler Contractor Management", keywords: &["permit tracking", "inspection scheduling", "compliance automation"] },
    ProjectArchetype { name: "E-Commerce Virtual Try-On System", keywords: &["AR preview", "product visualization", "size recommendation"] },
    ProjectArchetype { name: "Crypto Trading Bot Interface", keywords: &["position monitoring", "strategy backtesting", "P&L tracking"] },
    ProjectArchetype { name: "PowerPoint Recording Integration", keywords: &["GoPro webcam sync", "slide capture", "video embedding"] },
    ProjectArchetype { name: "Custom Wheel Configurator", keywords: &["3D preview", "material selection", "pricing calculator"] },
    ProjectArchetype { name: "Google Workspace Migration Tool", keywords: &["email transfer", "domain switching", "user provisioning"] },
    ProjectArchetype { name: "CSAT Dashboard for Support Teams", keywords: &["ticket analytics", "response metrics", "satisfaction tracking"] },
    ProjectArchetype { name: "SDK Development Interface", keywords: &["API testing", "code generation", "documentation builder"] },
    ProjectArchetype { name: "Smart Office Monitoring System", keywords: &["RFID tracking", "facial recognition", "occupancy analytics"] },
    ProjectArchetype { name: "LMS with AI Tutoring", keywords: &["course builder", "progress tracking", "personalized feedback"] },
    ProjectArchetype { name: "Invoice & Inventory Manager", keywords: &["product attributes", "SQL queries", "billing automation"] },
    ProjectArchetype { name: "Shopify Store Animator", keywords: &["product transitions", "hover effects", "cart animations"] },
    ProjectArchetype { name: "Media File Converter Tool", keywords: &[".media to mp4", "batch processing", "format detection"] },
    ProjectArchetype { name: "Email Duplicate Resolver", keywords: &["Outlook cleanup", "merge detection", "folder organization"] },
    ProjectArchetype { name: "SDN Load Balancer Console", keywords: &["traffic distribution", "Floodlight controller", "network topology"] },
    ProjectArchetype { name: "Subscription Management Fix", keywords: &["Google Play billing", "payment validation", "renewal tracking"] },
    ProjectArchetype { name: "Internal Workflow Builder", keywords: &["approval chains", "task routing", "deadline management"] },
    ProjectArchetype { name: "AI Companion Chat Interface", keywords: &["voice calls", "memory system", "personality settings"] },
    ProjectArchetype { name: "Web3 Gamification Platform", keywords: &["token rewards", "achievement system", "leaderboards"] },
    ProjectArchetype { name: "Asset Sync for Property Management", keywords: &["room inventory", "maintenance scheduling", "vendor coordination"] },
    ProjectArchetype { name: "Figma to Code Converter", keywords: &["component mapping", "style extraction", "responsive layouts"] },
    ProjectArchetype { name: "Java Swing Kiosk UI", keywords: &["touch interface", "payment processing", "queue management"] },
    ProjectArchetype { name: "Raspberry Pi Vision System", keywords: &["object classification", "real-time detection", "GPIO control"] },
    ProjectArchetype { name: "PBX Configuration Tool", keywords: &["call routing", "extension management", "voicemail setup"] },
    ProjectArchetype { name: "SaaS Operational Dashboard", keywords: &["uptime monitoring", "deployment status", "incident tracking"] },
    ProjectArchetype { name: "Security Compliance Validator", keywords: &["audit checks", "policy enforcement", "vulnerability scanning"] },
    ProjectArchetype { name: "Content Management for AI Blog", keywords: &["article generation", "SEO optimization", "publishing workflow"] },
    ProjectArchetype { name: "Offline-First Health Tracker", keywords: &["wearable sync", "data caching", "health metrics"] },
    ProjectArchetype { name: "Meeting Notes Automation", keywords: &["transcript processing", "action extraction", "calendar integration"] },
    ProjectArchetype { name: "Developer Hiring Assistant", keywords: &["resume screening", "skill matching", "interview scheduling"] },
    ProjectArchetype { name: "Manufacturing Quality Control", keywords: &["defect detection", "production metrics", "batch tracking"] },
    ProjectArchetype { name: "Real Estate Listing Manager", keywords: &["property import", "photo optimization", "MLS sync"] },
    ProjectArchetype { name: "Restaurant Order Dashboard", keywords: &["kitchen display", "order tracking", "delivery coordination"] },
    ProjectArchetype { name: "Dental Practice Scheduler", keywords: &["appointment booking", "treatment planning", "insurance verification"] },
    ProjectArchetype { name: "Gym Member Portal", keywords: &["class booking", "trainer scheduling", "payment processing"] },
    ProjectArchetype { name: "School Attendance System", keywords: &["check-in kiosk", "parent notifications", "absence tracking"] },
    ProjectArchetype { name: "Fleet Management Console", keywords: &["vehicle tracking", "maintenance alerts", "fuel monitoring"] },
    ProjectArchetype { name: "Legal Document Automation", keywords: &["template filling", "clause library", "signature collection"] },
    ProjectArchetype { name: "Warehouse Picking Optimizer", keywords: &["route planning", "inventory location", "order batching"] },
];

const DOMAINS: &[&str] = &[
    "Healthcare & Medical", "Financial Services", "E-commerce & Retail",
    "Education & EdTech", "Legal & Compliance", "Real Estate & Property",
    "Manufacturing & Supply Chain", "Logistics & Transportation", "Marketing & Advertising",
    "Human Resources", "Hospitality & Tourism", "Agriculture & Food Tech",
    "Energy & Utilities", "Media & Entertainment", "Non-Profit & NGO",
    "Government & Public Sector", "Insurance", "Telecommunications",
    "Pharmaceutical", "Construction & Engineering", "Automotive & Mobility",
    "Aerospace & Defense", "Gaming & Esports", "Fashion & Apparel",
    "Sports & Fitness", "Food Service & Restaurants", "Travel & Airlines",
    "Banking & Investment", "Cryptocurrency & Blockchain", "Social Media & Networking",
    "Cybersecurity", "Biotechnology", "Clean Energy & Sustainability",
    "Mining & Resources", "Maritime & Shipping", "Art & Design",
    "Music & Audio", "Publishing & Literature", "Pet Care & Veterinary",
    "Beauty & Cosmetics", "Home Services", "Event Management",
    "Consulting & Professional Services", "Research & Development", "Space Technology",
    "Quantum Computing", "Robotics & Automation", "Mental Health & Wellness",
    "Elder Care", "Child Care & Development", "Urban Planning & Smart Cities",
];

const DESIGN_STYLES: &[DesignStyle] = &[
    DesignStyle { name: "Clean Business", features: &["professional layout", "clear typography", "structured sections"], theme: "light", layout_hint: "standard-grid" },
    DesignStyle { name: "Modern Flat", features: &["flat colors", "simple icons", "card-based layout"], theme: "light", layout_hint: "card-grid" },
    DesignStyle { name: "Classic Dashboard", features: &["data tables", "charts", "metrics display"], theme: "light", layout_hint: "dashboard" },
    DesignStyle { name: "Minimal Clean", features: &["lots of whitespace", "simple forms", "basic navigation"], theme: "light", layout_hint: "single-column" },
    DesignStyle { name: "Material Design", features: &["shadows", "ripple effects", "floating buttons"], theme: "light", layout_hint: "material-cards" },
    DesignStyle { name: "Bootstrap Style", features: &["responsive grid", "standard components", "familiar patterns"], theme: "light", layout_hint: "bootstrap-grid" },
    DesignStyle { name: "Corporate Professional", features: &["formal layout", "conservative colors", "traditional navigation"], theme: "light", layout_hint: "header-content-footer" },
    DesignStyle { name: "SaaS Standard", features: &["sidebar navigation", "content area", "action buttons"], theme: "light", layout_hint: "sidebar-main" },
    DesignStyle { name: "Data Entry Form", features: &["form fields", "validation messages", "submit buttons"], theme: "light", layout_hint: "form-layout" },
    DesignStyle { name: "E-commerce Layout", features: &["product grid", "filters sidebar", "shopping cart"], theme: "light", layout_hint: "shop-grid" },
    DesignStyle { name: "Admin Panel", features: &["navigation menu", "data tables", "action buttons"], theme: "light", layout_hint: "admin-layout" },
    DesignStyle { name: "Spreadsheet View", features: &["table layout", "cell editing", "toolbar"], theme: "light", layout_hint: "spreadsheet" },
    DesignStyle { name: "Kanban Board", features: &["column layout", "draggable cards", "status indicators"], theme: "light", layout_hint: "kanban" },
    DesignStyle { name: "Calendar View", features: &["month/week/day views", "event blocks", "date navigation"], theme: "light", layout_hint: "calendar" },
];

const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme { primary: "#007BFF", secondary: "#6C757D", accent: "#28A745", label: "Standard Blue" },
    ColorScheme { primary: "#4A90E2", secondary: "#7B8B9A", accent: "#5CB85C", label: "Professional Blue" },
    ColorScheme { primary: "#2C3E50", secondary: "#34495E", accent: "#3498DB", label: "Corporate Dark" },
    ColorScheme { primary: "#FFFFFF", secondary: "#F5F5F5", accent: "#007BFF", label: "Clean White" },
    ColorScheme { primary: "#333333", secondary: "#666666", accent: "#0066CC", label: "Classic Gray" },
    ColorScheme { primary: "#1976D2", secondary: "#424242", accent: "#4CAF50", label: "Material Blue" },
    ColorScheme { primary: "#24292E", secondary: "#586069", accent: "#0366D6", label: "GitHub Style" },
    ColorScheme { primary: "#FAFAFA", secondary: "#E0E0E0", accent: "#1976D2", label: "Light Gray" },
    ColorScheme { primary: "#0056B3", secondary: "#6C757D", accent: "#17A2B8", label: "Bootstrap Blue" },
    ColorScheme { primary: "#343A40", secondary: "#495057", accent: "#007BFF", label: "Dark Admin" },
    ColorScheme { primary: "#F8F9FA", secondary: "#DEE2E6", accent: "#DC3545", label: "Light with Red" },
    ColorScheme { primary: "#212529", secondary: "#343A40", accent: "#FFC107", label: "Dark with Yellow" },
    ColorScheme { primary: "#FFFFFF", secondary: "#F1F3F4", accent: "#1A73E8", label: "Google Style" },
    ColorScheme { primary: "#1F1F1F", secondary: "#2D2D30", accent: "#007ACC", label: "VS Code Dark" },
];

const FEATURES: &[&str] = &[
    "Search and filter options", "Export to Excel/CSV", "Email notifications",
    "File upload and preview", "Calendar scheduling", "User permissions and roles",
    "Print preview", "Bulk actions", "Undo/redo functionality",
    "Keyboard shortcuts", "Mobile responsive view", "Dark mode toggle",
    "Quick actions menu", "Saved filters", "Recent activity log",
    "Data validation", "Auto-save drafts", "Batch import",
    "Custom fields", "Status tracking", "Comment threads",
    "File attachments", "Quick search", "Sort options",
    "Pagination controls",
];

fn n(rng: &mut dyn RngCore, lo: u32, hi: u32) -> u32 {
    rng.gen_range(lo..=hi)
}

const METRICS: &[MetricTemplate] = &[
    MetricTemplate { kind: "efficiency", generator: |r| format!("{}% faster processing", n(r, 25, 85)) },
    MetricTemplate { kind: "cost", generator: |r| format!("${}k annual savings", n(r, 10, 150)) },
    MetricTemplate { kind: "accuracy", generator: |r| format!("{}.{}% accuracy rate", n(r, 92, 99), n(r, 0, 9)) },
    MetricTemplate { kind: "adoption", generator: |r| format!("{} daily active users", n(r, 500, 5000)) },
    MetricTemplate { kind: "reduction", generator: |r| format!("{}% reduction in manual tasks", n(r, 30, 70)) },
    MetricTemplate { kind: "roi", generator: |r| format!("{}% ROI in first year", n(r, 150, 400)) },
    MetricTemplate { kind: "time", generator: |r| format!("{} hours saved per week per user", n(r, 2, 8)) },
    MetricTemplate { kind: "throughput", generator: |r| format!("{} requests per second", n(r, 1000, 10000)) },
    MetricTemplate { kind: "uptime", generator: |r| format!("99.{}% uptime SLA", n(r, 95, 99)) },
    MetricTemplate { kind: "response", generator: |r| format!("<{}ms response time", n(r, 50, 200)) },
];

const SCENARIOS: &[ScenarioTemplate] = &[
    ScenarioTemplate { archetype: "Hotel PMS Integration Dashboard", render: |r, _| format!(
        "Currently showing: {} rooms synced via FIAS, {} check-ins today, {} reservations pending, occupancy at {}%",
        n(r, 150, 300), n(r, 20, 50), n(r, 5, 15), n(r, 65, 95)) },
    ScenarioTemplate { archetype: "Fire Sprinkler Contractor Management", render: |r, _| format!(
        "Currently showing: {} active permits, {} inspections scheduled this week, {} systems under maintenance, {} compliance alerts",
        n(r, 5, 20), n(r, 3, 8), n(r, 10, 30), n(r, 2, 5)) },
    ScenarioTemplate { archetype: "E-Commerce Virtual Try-On System", render: |r, _| format!(
        "Currently showing: {} customers trying products, {} items in AR preview, {}% fit accuracy, {} size recommendations generated",
        n(r, 50, 200), n(r, 5, 15), n(r, 70, 95), n(r, 10, 30)) },
    ScenarioTemplate { archetype: "Crypto Trading Bot Interface", render: |r, _| format!(
        "Currently showing: {} active positions, P&L: +{} USDT today, {} signals analyzed, {} strategies running",
        n(r, 5, 20), n(r, 100, 5000), n(r, 10, 50), n(r, 3, 10)) },
    ScenarioTemplate { archetype: "PowerPoint Recording Integration", render: |r, _| format!(
        "Currently showing: Recording slide {} of {}, GoPro connected at 1080p, {}GB captured, {} minutes elapsed",
        n(r, 5, 25), n(r, 30, 50), n(r, 2, 10), n(r, 15, 45)) },
    ScenarioTemplate { archetype: "Custom Wheel Configurator", render: |r, _| format!(
        "Currently showing: Carbon fiber wheel #{}, {} customizations applied, price: ${}, {} day production time",
        n(r, 1000, 9999), n(r, 5, 15), n(r, 2000, 8000), n(r, 3, 7)) },
    ScenarioTemplate { archetype: "Google Workspace Migration Tool", render: |r, _| format!(
        "Currently showing: {} accounts migrating, {}GB transferred, {} domains configured, {}% complete",
        n(r, 500, 2000), n(r, 100, 500), n(r, 10, 50), n(r, 70, 95)) },
    ScenarioTemplate { archetype: "CSAT Dashboard for Support Teams", render: |r, _| format!(
        "Currently showing: {}% satisfaction rate, {} tickets today, avg response: {} minutes, {} agents online",
        n(r, 80, 95), n(r, 50, 200), n(r, 2, 10), n(r, 5, 20)) },
    ScenarioTemplate { archetype: "SDK Development Interface", render: |r, _| format!(
        "Currently showing: {} API endpoints tested, {} lines documented, {} code samples generated, {} languages supported",
        n(r, 10, 50), n(r, 100, 500), n(r, 5, 15), n(r, 2, 8)) },
    ScenarioTemplate { archetype: "Smart Office Monitoring System", render: |r, _| format!(
        "Currently showing: {} employees checked in, {} zones monitored, {}% desk utilization, {} visitors registered",
        n(r, 50, 200), n(r, 10, 30), n(r, 60, 90), n(r, 2, 10)) },
    ScenarioTemplate { archetype: "LMS with AI Tutoring", render: |r, _| format!(
        "Currently showing: {} students online, {} courses active, {}% completion rate, {} AI feedback sessions",
        n(r, 100, 500), n(r, 20, 50), n(r, 70, 95), n(r, 10, 30)) },
    ScenarioTemplate { archetype: "Invoice & Inventory Manager", render: |r, _| format!(
        "Currently showing: {} products tracked, {} invoices pending, {} low stock alerts, revenue: ${}/month",
        n(r, 50, 200), n(r, 10, 50), n(r, 5, 20), n(r, 10000, 100000)) },
    ScenarioTemplate { archetype: "Restaurant Order Dashboard", render: |r, _| format!(
        "Currently showing: {} active orders, {} ready for pickup, avg prep time: {} mins, {} delivery drivers active",
        n(r, 20, 50), n(r, 5, 15), n(r, 8, 20), n(r, 3, 8)) },
    ScenarioTemplate { archetype: "Fleet Management Console", render: |r, _| format!(
        "Currently showing: {} vehicles tracked, {} maintenance due, fuel efficiency: {} MPG, {} miles today",
        n(r, 20, 100), n(r, 2, 8), n(r, 15, 30), n(r, 500, 2000)) },
    ScenarioTemplate { archetype: "Dental Practice Scheduler", render: |r, _| format!(
        "Currently showing: {} appointments today, {} procedures scheduled, {} insurance verifications pending, {} chairs occupied",
        n(r, 15, 40), n(r, 3, 8), n(r, 5, 15), n(r, 2, 5)) },
    ScenarioTemplate { archetype: "Warehouse Picking Optimizer", render: |r, _| format!(
        "Currently showing: {} orders in queue, {} pickers active, {}% accuracy rate, avg pick time: {} seconds",
        n(r, 50, 200), n(r, 10, 30), n(r, 80, 98), n(r, 30, 90)) },
];

fn generic_scenario(rng: &mut dyn RngCore, domain: &str) -> String {
    format!(
        "Currently showing: Processing {} {} items, {} active operations, system running at {}% capacity",
        n(rng, 10, 100),
        domain,
        n(rng, 2, 8),
        n(rng, 70, 100)
    )
}

const NAMES: NameCatalog = NameCatalog {
    short: &["Zap", "Bit", "Hex", "Neo", "Pix", "Vox", "Jax", "Dox", "Flux", "Apex", "Zest", "Dash", "Bolt", "Spark"],
    abstract_words: &["Nexus", "Prism", "Quantum", "Cipher", "Vector", "Matrix", "Vertex", "Nebula", "Cosmos", "Aurora"],
    descriptive: &["DataFlow", "CodeBase", "TaskSync", "WorkHub", "TeamLink", "DocuTrack", "MetricsPro", "CloudDesk", "ApiForge", "QueryMaster"],
    prefixes: &["Smart", "Quick", "Auto", "Flex", "Swift", "Meta", "Ultra", "Omni", "Hyper", "Super"],
    suffixes: &["ly", "ify", "io", "hub", "lab", "box", "kit", "app", "bot", "ai"],
    single: &["Cascade", "Horizon", "Momentum", "Clarity", "Fusion", "Velocity", "Synergy", "Elevate", "Amplify", "Optimize"],
    invented: &["Synthex", "Flowbite", "Stackly", "Buildr", "Shipfast", "Launchpad", "Codestream", "Tallyo", "Quorra", "Brightloop"],
    acronyms: &["AIDA", "FORGE", "SPARK", "RADAR", "SCOPE", "TRACE", "PULSE", "WAVE", "GRID", "CORE"],
    playful: &["Boop", "Zing", "Whisk", "Bloom", "Glide", "Drift", "Float", "Swirl", "Ripple", "Bubble"],
    word_pairs: &[
        WordPair { heads: &["Quick", "Easy", "Simple", "Fast", "Smart", "Pro", "Best"], tails: &["Invoice", "Track", "Manage", "Book", "Pay", "Sync", "File"], separator: "" },
        WordPair { heads: &["Team", "Project", "Task", "Work", "Sales", "Client", "Order"], tails: &["Hub", "Manager", "Portal", "Dashboard", "Central", "Pro", "Plus"], separator: "" },
        WordPair { heads: &["My", "The", "Express", "Instant", "Direct", "Swift", "Rapid"], tails: &["CRM", "ERP", "POS", "HRM", "CMS", "Admin", "Office"], separator: "" },
        WordPair { heads: &["Shop", "Store", "Market", "Retail", "Commerce", "Trade", "Merchant"], tails: &["Pro", "Plus", "Manager", "System", "Suite", "Portal"], separator: " " },
        WordPair { heads: &["Staff", "Employee", "HR", "Payroll", "Time", "Shift", "Schedule"], tails: &["Track", "Manager", "Portal", "System", "Pro", "Plus"], separator: "" },
    ],
};

const BUSINESS: BusinessCatalog = BusinessCatalog {
    types: &[
        "AI Prompt Library Manager with Version Control",
        "RAG Pipeline Builder with Document Chunking Visualizer",
        "AI Agent Marketplace with Performance Metrics",
        "LLM Response Evaluator with A/B Testing Dashboard",
        "Vector Database Query Optimizer with Embedding Viewer",
        "AI Model Fine-tuning Progress Tracker",
        "Prompt Engineering Playground with Cost Calculator",
        "AI Chatbot Training Data Annotation Platform",
        "Multi-Agent Workflow Designer with Execution Monitor",
        "AI API Usage Dashboard with Budget Alerts",
        "Synthetic Data Generator for ML Training",
        "AI Model Registry with Deployment Pipeline",
        "Prompt Template Marketplace for ChatGPT/Claude",
        "AI Content Detector and Humanization Tool",
        "LLM Chain Builder with Debug Console",
        "No-Code API Builder with Rate Limiting Dashboard",
        "Webhook Manager with Event Log Viewer",
        "SaaS Metrics Dashboard with MRR Tracking",
        "Customer Onboarding Flow Builder",
        "API Documentation Generator with Interactive Playground",
        "Subscription Billing Manager with Dunning Control",
        "Product Launch Checklist with Team Coordination",
        "Customer Feedback Loop Manager with AI Sentiment Analysis",
        "Growth Experiment Tracker with Statistical Significance",
        "User Behavior Analytics with Cohort Analysis",
        "Feature Flag Manager with Rollout Controls",
        "Microservices Health Monitor with Dependency Map",
        "Cloud Cost Optimizer with Recommendation Engine",
        "DevOps Pipeline Visualizer with Deployment History",
        "Error Tracking Dashboard with AI Root Cause Analysis",
        "AI Content Calendar with Auto-Generation Queue",
        "Newsletter A/B Testing Platform with AI Subject Lines",
        "Course Creation Platform with AI Module Generator",
        "Podcast Episode Planner with AI Show Notes",
        "YouTube Video Idea Generator with Trend Analysis",
        "Social Media Post Scheduler with AI Caption Writer",
        "Digital Product Launch Dashboard",
        "Creator Analytics Aggregator Across Platforms",
        "AI Thumbnail Generator with A/B Testing",
        "Content Repurposing Workflow Manager",
        "Real-time Data Pipeline Monitor with Anomaly Detection",
        "SQL Query Builder with AI Optimization Suggestions",
        "Data Quality Monitor with Automated Alerts",
        "ETL Job Scheduler with Dependency Visualization",
        "Business Intelligence Dashboard Builder",
        "Log Analysis Platform with Pattern Recognition",
        "Database Migration Tool with Rollback Manager",
        "Data Catalog with Lineage Tracking",
        "Async Standup Manager with AI Summaries",
        "Remote Team Time Zone Coordinator",
        "Virtual Office Space with Spatial Audio",
        "Meeting Recording Analyzer with Action Items",
        "Documentation Hub with AI Search",
        "Code Review Dashboard with AI Suggestions",
        "Sprint Planning Tool with Velocity Tracking",
        "Knowledge Base Builder with AI Auto-Tagging",
    ],
    features: &[
        "real-time status updates", "customer database", "appointment calendar",
        "payment processing", "SMS/email notifications", "photo uploads",
        "map view", "inventory tracking", "staff scheduling",
        "customer reviews", "order history", "analytics dashboard",
        "quick search", "mobile responsive", "export reports",
        "recurring bookings", "waitlist management", "customer notes",
        "service history", "pricing calculator",
    ],
    color_schemes: &[
        "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        "background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        "background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        "background: linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        "background: linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        "background: linear-gradient(135deg, #30cfd0 0%, #330867 100%)",
        "background: linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        "background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
        "background: linear-gradient(135deg, #a1c4fd 0%, #c2e9fb 100%)",
        "background: linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
        "background: linear-gradient(135deg, #ff6e7f 0%, #bfe9ff 100%)",
        "background: linear-gradient(135deg, #e0c3fc 0%, #8ec5fc 100%)",
        "background: linear-gradient(135deg, #f43b47 0%, #453a94 100%)",
        "background: linear-gradient(135deg, #0250c5 0%, #d43f8d 100%)",
        "background: linear-gradient(135deg, #88d3ce 0%, #6e45e2 100%)",
        "background: linear-gradient(135deg, #d299c2 0%, #fef9d7 100%)",
        "background: linear-gradient(135deg, #96fbc4 0%, #f9f586 100%)",
        "dark theme with neon accents (#0a0a0a background, #00ff88 and #ff00ff accents)",
        "cyberpunk theme with glowing edges (#1a0033 background, #ff006e and #ffdd00 accents)",
        "deep space theme (#000814 background, #001d3d and #ffd60a accents)",
        "soft pastel theme (#faf3f0 background, #e1bbb4 and #c89f9c accents)",
        "minimalist white (#ffffff background, #000000 text, single #ff6b6b accent)",
        "newspaper theme (#f7f3e9 background, #2f3e46 text, #e76f51 accents)",
    ],
    enhancements: &[
        "with real-time updates",
        "featuring live data visualization",
        "with animated transitions",
        "including interactive charts",
        "with drag-and-drop functionality",
        "featuring keyboard shortcuts",
        "with smart search capabilities",
        "including AI-powered suggestions",
        "with collaborative features",
        "featuring dark/light mode toggle",
    ],
};

const LAYOUTS: &[LayoutConstraint] = &[
    LayoutConstraint {
        name: "Bento Box Grid",
        structure: "Use CSS Grid with varying cell sizes (1x1, 2x1, 1x2, 2x2). NO sidebars. Main content in large center cell, smaller cells around it.",
        forbidden: "No traditional sidebar, no equal-sized cards",
    },
    LayoutConstraint {
        name: "Horizontal Ticker",
        structure: "Full-width horizontal scrolling sections. Each section is 100vw wide. Navigation dots at bottom.",
        forbidden: "No vertical scrolling, no sidebars, no grid layouts",
    },
    LayoutConstraint {
        name: "Circular Dashboard",
        structure: "Central circular display with radial menu items arranged in a circle around it. Use transform: rotate() for positioning.",
        forbidden: "No rectangles for main content, no traditional navigation",
    },
    LayoutConstraint {
        name: "Magazine Layout",
        structure: "Multi-column text flow with large featured images. Use CSS columns and column-span.",
        forbidden: "No sidebars, no card grids, no dashboards",
    },
    LayoutConstraint {
        name: "Floating Islands",
        structure: "Draggable floating panels at different z-indexes. Use position: absolute with transform.",
        forbidden: "No grids, no fixed layouts, no sidebars",
    },
    LayoutConstraint {
        name: "Split Diagonal",
        structure: "Screen split diagonally using clip-path. Two contrasting sections with skewed boundary.",
        forbidden: "No horizontal/vertical splits, no sidebars, no cards",
    },
    LayoutConstraint {
        name: "Honeycomb Hexagons",
        structure: "Hexagonal tiles arranged in honeycomb pattern. Use clip-path for hex shapes.",
        forbidden: "No rectangular elements, no traditional grids",
    },
    LayoutConstraint {
        name: "Vertical Timeline",
        structure: "Central vertical line with alternating left/right content blocks. Animated scroll indicators.",
        forbidden: "No sidebars, no dashboards, no horizontal layouts",
    },
    LayoutConstraint {
        name: "Overlap Cascade",
        structure: "Overlapping cards cascading from top-left to bottom-right. Each offset by 50px.",
        forbidden: "No grids, no sidebars, no aligned elements",
    },
    LayoutConstraint {
        name: "Metro Tiles",
        structure: "Windows Metro style with live animated tiles of different sizes. Some tiles flip to show backs.",
        forbidden: "No sidebars, no uniform sizing, no static content",
    },
    LayoutConstraint {
        name: "Spiral Navigation",
        structure: "Content arranged in expanding spiral from center. Scroll to rotate through spiral.",
        forbidden: "No linear layouts, no traditional navigation",
    },
    LayoutConstraint {
        name: "Brutalist Blocks",
        structure: "Harsh, asymmetric blocks with thick borders and diagonal text. Intentionally unaligned.",
        forbidden: "No smooth edges, no centered alignment, no traditional beauty",
    },
];

const FALLBACK_JOBS: &[&str] = &[
    "Build a ChatGPT plugin for e-commerce inventory management",
    "Create an AI chatbot for customer support with sentiment analysis",
    "Develop a RAG system for legal document analysis",
    "Build an AI content generator for social media marketing",
    "Create a voice AI assistant for medical appointment scheduling",
    "Develop an AI-powered code review tool for GitHub",
    "Build a multilingual translation API with context awareness",
    "Create an AI tool for PDF data extraction and summarization",
    "Develop a conversational AI tutor for language learning",
    "Build an AI workflow automation platform for small businesses",
    "Create an LLM-powered email response system",
    "Develop an AI resume parser and candidate matching system",
    "Build a GPT-4 integration for Slack team communication",
    "Create an AI agent for real estate property descriptions",
    "Develop a document QA system using embeddings and vector search",
    "Build an AI tool for generating product descriptions from images",
    "Create a meeting transcription and action item extraction tool",
    "Develop an AI-powered SEO content optimization platform",
    "Build a custom GPT for financial data analysis",
    "Create an AI system for automated invoice processing",
    "Develop a chatbot for WhatsApp Business integration",
    "Build an AI tool for generating test cases from requirements",
    "Create a voice cloning system for personalized audio content",
    "Develop an AI agent for competitor price monitoring",
    "Build a semantic search engine for internal knowledge base",
    "Create an AI tool for generating landing page copy",
    "Develop a multi-agent system for project management",
    "Build an AI-powered contract review and risk assessment tool",
    "Create a GPT wrapper for custom business logic",
    "Develop an AI system for generating technical documentation",
    "Build a conversational AI for hotel booking and concierge",
    "Create an AI tool for automated social media responses",
    "Develop a prompt optimization platform for businesses",
    "Build an AI agent for sales lead qualification",
    "Create a document comparison tool using LLMs",
    "Develop an AI system for personalized learning paths",
    "Build a GPT-powered data analysis dashboard",
    "Create an AI tool for generating video scripts",
    "Develop a chatbot for healthcare symptom checking",
    "Build an AI system for supply chain optimization",
];
