//! Pre-authored sector content. Each non-general domain maps to a fixed
//! five-field bundle; the general domain is synthesized in `content` instead.

use crate::domain::model::{ContentBundle, Domain};

/// Literal bundle for a sector, `None` for `Domain::General`.
pub fn domain_bundle(domain: Domain) -> Option<ContentBundle> {
    let bundle = match domain {
        Domain::General => return None,
        Domain::Healthcare => ContentBundle {
            summary: "• AI-powered comprehensive health monitoring system with real-time predictive analytics\n\
• Seamless integration with existing healthcare infrastructure and telemedicine platforms\n\
• Advanced machine learning algorithms for early disease detection and personalized treatment\n\
• Mobile-first approach ensuring accessibility in rural and remote areas\n\
• Blockchain-secured patient data management with privacy compliance\n\
• Automated emergency response system with geo-location tracking\n\
• IoT-enabled wearable devices for continuous vital sign monitoring\n\
• Telemedicine consultation platform with multi-language support\n\
• Predictive analytics for disease outbreak prevention and control\n\
• Integration with National Digital Health Mission framework\n\
• Real-time health data synchronization across healthcare providers\n\
• AI-driven personalized treatment recommendations and care plans"
                .to_string(),
            technical_approach: "• IoT sensors and wearable devices for continuous vital sign monitoring\n\
• Cloud-native architecture using AWS/Azure healthcare-compliant services\n\
• Deep learning models with TensorFlow/PyTorch for predictive health analytics\n\
• FHIR-compliant RESTful APIs for seamless healthcare data interoperability\n\
• Progressive Web App with offline-first capabilities for remote areas\n\
• Real-time data synchronization with hospital management systems\n\
• Edge computing for low-latency critical health alerts\n\
• Microservices architecture with Docker containerization\n\
• Blockchain integration for secure patient data management\n\
• Machine learning pipeline for continuous model improvement\n\
• Multi-factor authentication and role-based access control\n\
• Automated backup and disaster recovery systems"
                .to_string(),
            feasibility: "• High technical feasibility leveraging proven healthcare IoT technologies\n\
• Full regulatory compliance with HIPAA, GDPR, and Indian healthcare data standards\n\
• Scalable microservices architecture with 99.99% uptime SLA guarantee\n\
• Cost-effective implementation aligned with government Digital Health Mission\n\
• Phased deployment strategy minimizing operational disruption\n\
• Strong vendor ecosystem support for healthcare technology integration\n\
• Proven ROI with 3-year payback period for healthcare institutions\n\
• Government funding support through National Health Mission\n\
• Existing infrastructure compatibility reducing implementation costs\n\
• Skilled developer availability for maintenance and support\n\
• Established partnerships with healthcare technology providers\n\
• Regulatory approval pathway clearly defined and achievable"
                .to_string(),
            impact: "• Revolutionary improvement in healthcare access for 50M+ underserved populations\n\
• Early disease detection capabilities reducing treatment costs by 50-70%\n\
• Enhanced healthcare delivery efficiency improving patient outcomes by 40%\n\
• Support for 100,000+ patients with seamless national scaling potential\n\
• Reduction in healthcare disparities between urban and rural areas\n\
• Integration with National Digital Health Blueprint for policy alignment\n\
• Creation of 10,000+ direct and indirect employment opportunities\n\
• Annual healthcare cost savings of ₹500+ crores for government\n\
• Improved emergency response time by 60% in rural areas\n\
• Enhanced preventive care leading to 30% reduction in hospital admissions\n\
• Digital health literacy improvement for 1M+ citizens\n\
• Contribution to India's goal of Universal Health Coverage by 2030"
                .to_string(),
            references: vec![
                "National Health Mission Guidelines 2024".to_string(),
                "WHO Digital Health Standards".to_string(),
                "AIIMS Research Papers on Telemedicine".to_string(),
                "Healthcare Technology Assessment Reports".to_string(),
                "Digital Health Mission Policy Framework".to_string(),
            ],
        },
        Domain::Agriculture => ContentBundle {
            summary: "• Smart agricultural solution leveraging IoT, AI, and satellite imagery\n\
• Precision farming techniques for optimal crop yield and resource management\n\
• Real-time monitoring of soil conditions, weather patterns, and crop health\n\
• Direct farmer-to-market connectivity reducing intermediary costs\n\
• Automated irrigation system with water conservation features\n\
• Crop disease detection using computer vision and machine learning\n\
• Weather prediction and climate advisory services\n\
• Supply chain optimization from farm to consumer\n\
• Financial inclusion through digital payment systems\n\
• Agricultural insurance integration with risk assessment\n\
• Knowledge sharing platform for best farming practices\n\
• Government scheme integration and subsidy management"
                .to_string(),
            technical_approach: "• IoT sensors for soil moisture, pH, and nutrient monitoring\n\
• Drone technology and satellite imagery for crop surveillance\n\
• Machine learning models for crop prediction and disease detection\n\
• Blockchain for supply chain transparency and farmer payments\n\
• Progressive Web App for offline functionality in rural areas\n\
• Edge computing for real-time data processing\n\
• GPS-enabled precision agriculture equipment integration\n\
• Weather station network for micro-climate monitoring\n\
• Mobile app with voice commands in local languages\n\
• Cloud-based analytics platform for data insights\n\
• Integration with government agricultural databases\n\
• Automated alert system for critical farming decisions"
                .to_string(),
            feasibility: "• Proven agricultural technologies with successful pilot implementations\n\
• Government support through Digital India and PM-KISAN initiatives\n\
• Cost-effective sensor deployment with 3-year ROI for farmers\n\
• Scalable architecture supporting 50,000+ farmers per region"
                .to_string(),
            impact: "• 25-30% increase in crop yield through precision farming\n\
• 40% reduction in water usage and fertilizer costs\n\
• Direct market access increasing farmer income by 20-35%\n\
• Environmental sustainability through optimized resource usage"
                .to_string(),
            references: vec![
                "ICAR Agricultural Research Guidelines".to_string(),
                "FAO Smart Agriculture Reports".to_string(),
                "Government of India Agriculture Policy".to_string(),
                "Precision Farming Case Studies".to_string(),
            ],
        },
        Domain::Transportation => ContentBundle {
            summary: "• Intelligent transportation system with real-time route optimization\n\
• Multi-modal transport integration for seamless connectivity\n\
• AI-powered traffic management and congestion reduction\n\
• Sustainable transportation solutions with electric vehicle integration"
                .to_string(),
            technical_approach: "• GPS tracking and real-time location services\n\
• Machine learning algorithms for route optimization and demand prediction\n\
• Integration with existing transport APIs and government systems\n\
• Mobile app with offline maps and multi-language support\n\
• Cloud infrastructure for handling high-volume real-time data"
                .to_string(),
            feasibility: "• Leverages existing GPS and mobile infrastructure\n\
• Government support through Smart Cities Mission\n\
• Proven algorithms from successful implementations in other regions\n\
• Scalable solution with modular deployment approach"
                .to_string(),
            impact: "• 30-40% reduction in travel time and fuel consumption\n\
• Improved accessibility for rural and remote communities\n\
• Economic benefits through efficient goods transportation\n\
• Environmental impact reduction through optimized routing"
                .to_string(),
            references: vec![
                "Ministry of Road Transport Guidelines".to_string(),
                "Smart Cities Mission Reports".to_string(),
                "ITS Implementation Standards".to_string(),
                "Transportation Research Papers".to_string(),
            ],
        },
        Domain::Education => ContentBundle {
            summary: "• AI-powered personalized learning platform with adaptive content delivery\n\
• Multi-language support for inclusive education across diverse populations\n\
• Gamification and interactive learning modules for enhanced engagement\n\
• Teacher training and support systems for effective technology adoption"
                .to_string(),
            technical_approach: "• Adaptive learning algorithms using machine learning\n\
• Content management system with multimedia support\n\
• Real-time progress tracking and analytics dashboard\n\
• Offline-capable mobile app for areas with limited connectivity\n\
• Integration with existing educational management systems"
                .to_string(),
            feasibility: "• Built on proven educational technology frameworks\n\
• Alignment with National Education Policy 2020\n\
• Cost-effective deployment through government education initiatives\n\
• Scalable cloud infrastructure supporting millions of students"
                .to_string(),
            impact: "• Improved learning outcomes with 25-30% better retention rates\n\
• Increased access to quality education in rural and remote areas\n\
• Teacher efficiency improvement through automated assessment tools\n\
• Reduced educational inequality through personalized learning paths"
                .to_string(),
            references: vec![
                "National Education Policy 2020".to_string(),
                "UNESCO Education Technology Reports".to_string(),
                "NCERT Digital Learning Guidelines".to_string(),
                "Educational Research Studies".to_string(),
            ],
        },
        Domain::Environment => ContentBundle {
            summary: "• Environmental monitoring system with real-time pollution tracking\n\
• AI-powered analysis for environmental impact assessment\n\
• Community engagement platform for environmental awareness\n\
• Integration with government environmental monitoring systems"
                .to_string(),
            technical_approach: "• IoT sensors for air quality, water quality, and noise monitoring\n\
• Satellite imagery analysis for environmental change detection\n\
• Machine learning models for pollution prediction and trend analysis\n\
• Mobile app for citizen reporting and environmental data visualization\n\
• Cloud-based data processing with real-time alerts"
                .to_string(),
            feasibility: "• Proven environmental monitoring technologies\n\
• Government support through environmental protection initiatives\n\
• Cost-effective sensor deployment with community participation\n\
• Scalable solution for city-wide and regional implementation"
                .to_string(),
            impact: "• Real-time environmental awareness for 100,000+ citizens\n\
• 20-25% improvement in environmental compliance monitoring\n\
• Data-driven policy making for environmental protection\n\
• Community engagement leading to behavioral change"
                .to_string(),
            references: vec![
                "Central Pollution Control Board Guidelines".to_string(),
                "Environmental Impact Assessment Reports".to_string(),
                "Green Technology Research".to_string(),
                "Sustainable Development Goals".to_string(),
            ],
        },
        Domain::Fintech => ContentBundle {
            summary: "• Secure digital finance platform with inclusive onboarding for unbanked users\n\
• AI-driven credit scoring using alternative transaction data\n\
• Real-time fraud detection with anomaly monitoring and alerts\n\
• Vernacular-first interfaces enabling rural financial literacy"
                .to_string(),
            technical_approach: "• UPI and account-aggregator integration for payments and consented data\n\
• Machine learning models for risk scoring and fraud analytics\n\
• Tokenized, PCI-DSS compliant storage for sensitive credentials\n\
• Offline-capable mobile app with SMS fallback for low-connectivity areas\n\
• Cloud infrastructure with audited, immutable transaction logs"
                .to_string(),
            feasibility: "• Builds on India Stack rails already proven at national scale\n\
• RBI regulatory sandbox pathway for phased compliance\n\
• Low customer acquisition cost through assisted onboarding networks\n\
• Scalable architecture validated by existing digital payment volumes"
                .to_string(),
            impact: "• Formal credit access for 10M+ thin-file borrowers\n\
• 30-40% reduction in loan processing turnaround time\n\
• Measurable drop in fraud losses through real-time monitoring\n\
• Progress toward universal financial inclusion targets"
                .to_string(),
            references: vec![
                "RBI Digital Lending Guidelines".to_string(),
                "NPCI UPI Technical Specifications".to_string(),
                "Financial Inclusion Index Reports".to_string(),
                "Account Aggregator Framework Documentation".to_string(),
            ],
        },
        Domain::Smartcity => ContentBundle {
            summary: "• Integrated urban operations platform unifying civic services and utilities\n\
• IoT-instrumented infrastructure for live city-wide situational awareness\n\
• Data-driven planning tools for municipal administrators\n\
• Citizen grievance and feedback loop with transparent tracking"
                .to_string(),
            technical_approach: "• City-wide sensor network for utilities, lighting, and waste collection\n\
• GIS-based dashboards with real-time event correlation\n\
• Open APIs for civic data sharing across departments\n\
• Mobile citizen app with service requests and status tracking\n\
• Scalable cloud platform with per-ward data partitioning"
                .to_string(),
            feasibility: "• Aligned with Smart Cities Mission funding and governance structures\n\
• Incremental ward-by-ward rollout limiting upfront investment\n\
• Proven sensor and GIS technology from existing deployments\n\
• Municipal staff training programs ensuring operational adoption"
                .to_string(),
            impact: "• Faster civic issue resolution for 500,000+ urban residents\n\
• 20-30% reduction in utility losses through live monitoring\n\
• Evidence-based budgeting for municipal infrastructure\n\
• Improved transparency and trust in local governance"
                .to_string(),
            references: vec![
                "Smart Cities Mission Guidelines".to_string(),
                "Urban Data Exchange Standards".to_string(),
                "Municipal E-Governance Frameworks".to_string(),
                "City Infrastructure Investment Reports".to_string(),
            ],
        },
        Domain::Tourism => ContentBundle {
            summary: "• Unified travel companion platform covering discovery, booking, and safety\n\
• AI-personalized itineraries built from traveler interests and season\n\
• Verified local guide and homestay marketplace supporting communities\n\
• Emergency assistance with geo-fenced alerts for remote destinations"
                .to_string(),
            technical_approach: "• Location-aware mobile app with offline maps and multilingual content\n\
• Recommendation engine trained on travel patterns and reviews\n\
• Integration with national tourism registries and transport APIs\n\
• Geo-fencing services for restricted and high-risk zones\n\
• Cloud backend with seasonal load auto-scaling"
                .to_string(),
            feasibility: "• Leverages existing tourism board digital assets and datasets\n\
• Revenue-sharing model sustaining local partner participation\n\
• Proven mapping and booking integrations reduce build risk\n\
• Phased state-by-state rollout with pilot destination circuits"
                .to_string(),
            impact: "• Richer travel experience for 1M+ domestic and foreign tourists\n\
• 15-25% income uplift for registered local guides and homestays\n\
• Faster emergency response in remote tourist destinations\n\
• Balanced footfall distribution easing over-touristed sites"
                .to_string(),
            references: vec![
                "Ministry of Tourism Annual Reports".to_string(),
                "Incredible India Digital Initiatives".to_string(),
                "Sustainable Tourism Criteria".to_string(),
                "Travel Safety Advisory Frameworks".to_string(),
            ],
        },
    };

    Some(bundle)
}
